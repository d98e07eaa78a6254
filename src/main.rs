fn main() {
    kitchen_bin::main();
}
