use crate::app::BoardService;
use crate::cli::action::{GlobalOpts, run_action};
use crate::cli::render::{print_config, print_init};

pub fn execute_init(service: &BoardService, opts: GlobalOpts) -> i32 {
    run_action(
        "tgs init",
        opts,
        || service.init(),
        |result| result.clone(),
        |result| {
            print_init(result);
            Ok(())
        },
    )
}

pub fn execute_config(service: &BoardService, opts: GlobalOpts) -> i32 {
    run_action(
        "tgs config",
        opts,
        || service.config(),
        |config| config.clone(),
        |config| {
            print_config(config);
            Ok(())
        },
    )
}
