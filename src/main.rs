use tinysh::Interpreter;

fn main() {
    let mut sh = Interpreter::default();
    if let Err(err) = sh.repl() {
        eprintln!("tinysh: {err:#}");
        std::process::exit(1);
    }
}
