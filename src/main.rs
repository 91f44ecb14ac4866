use anyhow::Result;
use blockmerge::report::Reporter;

fn main() -> Result<()> {
    let args = blockmerge::args::parsed();
    let mut report = Reporter::stdout(args.color);
    let client = blockmerge::fetch::client()?;
    blockmerge::update(&client, &args.output, &mut report)?;
    Ok(())
}
