use tugas::app::runtime::{get_repo_root, init_tracing};
use tugas::cli::run_cli;

fn main() {
    init_tracing();
    let repo_root = get_repo_root();
    let exit_code = run_cli(&repo_root);
    std::process::exit(exit_code);
}
