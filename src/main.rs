fn main() {
    ctlplane::run_cli();
}
