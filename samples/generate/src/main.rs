use std::{fs, io, path::Path};

use clap::Parser;
use restart_models::{readme, ser::gltf::to_glb, ModelGroup, PrimitiveRestart};

mod cli;

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Generate(#[from] restart_models::Error),
    #[error(transparent)]
    Export(#[from] restart_models::ser::gltf::Error),
}

/// Write every model of `group` to `<out_dir>/<group id>/`, along with its readme.
#[tracing::instrument(skip_all, fields(group = %group.id()))]
fn write_group(group: &impl ModelGroup, out_dir: &Path, with_readme: bool) -> Result<(), Error> {
    let dir = out_dir.join(group.id().to_string());
    fs::create_dir_all(&dir)?;

    for model in group.models() {
        let path = dir.join(format!("{}.glb", model.name));
        let data = to_glb(model)?;
        tracing::debug!(path = ?path, bytes = data.len(), "writing model");
        fs::write(&path, data)?;
    }

    if with_readme {
        let path = dir.join("README.md");
        tracing::debug!(path = ?path, "writing readme");
        fs::write(path, readme::document(group))?;
    }

    tracing::info!(
        dir = ?dir,
        models = group.models().len(),
        "wrote model group"
    );
    Ok(())
}

fn main() -> Result<(), Error> {
    let args = cli::Cli::parse();
    cli::initialize_tracing(&args.log_filter, args.log_format);

    let group = PrimitiveRestart::new(&[])?;
    write_group(&group, &args.out_dir, !args.no_readme)
}
