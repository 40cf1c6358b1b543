// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
iced_folio - animated portfolio with project galleries

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <LOCALE>          Interface language (e.g. en-US, pt-BR)
  --projects <FILE>        Project catalog JSON replacing the embedded one
  --profile <FILE>         Profile JSON replacing the embedded one
  --config-dir <DIR>       Directory holding settings.toml
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        projects: args.opt_value_from_str::<_, PathBuf>("--projects")?,
        profile: args.opt_value_from_str::<_, PathBuf>("--profile")?,
        config_dir: args.opt_value_from_str::<_, PathBuf>("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
