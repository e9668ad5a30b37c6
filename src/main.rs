fn main() {
    chess_rules_engine::terminal::run_interactive_terminal();
}
