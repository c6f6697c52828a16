use loggy::cli::{build_cli, parse_invocation, run};
use std::io::IsTerminal;

fn main() -> anyhow::Result<()> {
    let matches = build_cli().get_matches();

    if let Err(e) = loggy::internal::logger::init_diagnostics("warn", std::io::stderr().is_terminal()) {
        eprintln!("Failed to initialize diagnostics: {}", e);
        std::process::exit(1);
    }

    let invocation = match parse_invocation(&matches) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Invalid arguments: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&invocation) {
        eprintln!("loggy: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
