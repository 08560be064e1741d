use std::path::Path;

pub fn run_path(log_path: &Path) {
    println!("{}", log_path.display());
    if !log_path.exists() {
        eprintln!("(not created yet)");
    }
}
