use std::path::Path;
use std::process;

use venule::flags::Flags;
use venule::shell::Shell;

fn main() -> Result<(), venule::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = std::env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("Venule {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let script = flags.script().cloned();
    let mut shell = Shell::new(flags)?;

    let code = match script {
        Some(path) => shell.run_script(Path::new(&path))?,
        None => shell.run()?,
    };
    process::exit(code);
}
