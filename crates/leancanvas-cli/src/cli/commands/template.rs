use anyhow::{bail, Context};
use leancanvas_core::CanvasInput;

use crate::cli::args::TemplateArgs;
use crate::exit_codes;

pub fn run(args: TemplateArgs) -> anyhow::Result<i32> {
    let yaml = CanvasInput::default().to_yaml()?;

    let Some(path) = args.output else {
        print!("{}", yaml);
        return Ok(exit_codes::OK);
    };

    if path.exists() && !args.force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    std::fs::write(&path, yaml).with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("Wrote canvas template to {}", path.display());
    Ok(exit_codes::OK)
}
