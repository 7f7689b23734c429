use clap::Parser;
use hog::cli::Command;

fn main() -> anyhow::Result<()> {
    hog::log()?;
    Command::parse().run()
}
