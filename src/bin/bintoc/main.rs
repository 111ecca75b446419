//! bintoc CLI tool.

mod embed;

use clap::Parser;

#[derive(Parser)]
#[clap(name = "bintoc", about = "Binary to C array utility")]
struct Cli {
    #[clap(flatten)]
    cmd: embed::Cmd,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();

    args.cmd.run()
}
