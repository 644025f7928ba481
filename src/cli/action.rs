use crate::errors::TgsError;
use crate::output::{error_envelope, ok_envelope, render_envelope};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct GlobalOpts {
    pub json: bool,
}

pub fn run_action<T, J, F, M, H>(
    command_line: &str,
    opts: GlobalOpts,
    action: F,
    map_json: M,
    human: H,
) -> i32
where
    F: FnOnce() -> Result<T, TgsError>,
    M: FnOnce(&T) -> J,
    H: FnOnce(&T) -> Result<(), TgsError>,
    J: Serialize,
{
    match action() {
        Ok(value) => {
            if opts.json {
                let envelope = ok_envelope(command_line, map_json(&value));
                match render_envelope(&envelope) {
                    Ok(text) => println!("{}", text),
                    Err(error) => {
                        print_human_error(&error);
                        return error.exit_code;
                    }
                }
            } else if let Err(error) = human(&value) {
                print_human_error(&error);
                return error.exit_code;
            }
            0
        }
        Err(error) => emit_error(command_line, opts, error),
    }
}

pub fn emit_error(command_line: &str, opts: GlobalOpts, error: TgsError) -> i32 {
    if opts.json {
        match render_envelope(&error_envelope(command_line, &error)) {
            Ok(text) => println!("{}", text),
            Err(render_error) => {
                print_human_error(&render_error);
                return render_error.exit_code;
            }
        }
    } else {
        print_human_error(&error);
    }
    error.exit_code
}

fn print_human_error(error: &TgsError) {
    eprintln!("{}: {}", error.code, error.message);
    if let Some(details) = &error.details {
        eprintln!("{}", details);
    }
}
