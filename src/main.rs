// SPDX-License-Identifier: MPL-2.0
use swipe_shop::app::{self, Flags};
use swipe_shop::config::ExhaustionMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Swipe Shop

USAGE:
  swipe_shop [OPTIONS]

OPTIONS:
  --lang <LOCALE>          Interface language (e.g. en-US, fr)
  --config-dir <PATH>      Directory holding settings.toml
  --exhaustion <MODE>      What to do after the last card: reload | stop
  -h, --help               Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        exhaustion: args.opt_value_from_str::<_, ExhaustionMode>("--exhaustion")?,
    })
}
