fn main() {
    translator_frontend::run();
}
