fn main() {
    packagetest::cli::run();
}
