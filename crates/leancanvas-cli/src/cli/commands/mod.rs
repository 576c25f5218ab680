use super::args::*;

pub mod about;
pub mod fill;
pub(crate) mod session;
pub mod submit;
pub mod template;

use crate::exit_codes;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Fill(args) => fill::run(args).await,
        Command::Submit(args) => submit::run(args).await,
        Command::Template(args) => template::run(args),
        Command::About => Ok(about::run()),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
    }
}
