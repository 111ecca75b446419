use anyhow::{Context, Error};
use bintoc::{basename, write_declaration, write_definition, Identifier};
use clap::Parser;
use clap_num::maybe_hex;
use log::{info, warn};
use std::{
    ffi::OsStr,
    fs::File,
    io::{Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

#[derive(Parser)]
pub struct Cmd {
    /// Binary file to embed.
    #[arg(value_name = "INPUT")]
    input_path: PathBuf,
    /// Start N bytes into the source file.
    #[clap(long, value_name = "N", default_value = "0", value_parser = maybe_hex::<u64>)]
    skip: u64,
}

impl Cmd {
    pub fn run(self) -> anyhow::Result<()> {
        let file_name = match self.input_path.file_name().and_then(OsStr::to_str)
        {
            Some(name) => name,
            None => {
                return Err(Error::msg("input path has no usable file name"));
            }
        };

        let name = Identifier::from_file_name(file_name)?;
        let stem = basename(file_name);

        // Outputs land in the working directory. The stem keeps the
        // original characters; only the symbol name is sanitized.
        let definition_path = PathBuf::from(format!("{stem}.c"));
        let declaration_path = PathBuf::from(format!("{stem}.h"));

        let written = embed(
            &self.input_path,
            self.skip,
            &name,
            &definition_path,
            &declaration_path,
        )?;

        info!(
            "embedded {} bytes as `{}` into {} and {}",
            written,
            name,
            definition_path.display(),
            declaration_path.display()
        );

        Ok(())
    }
}

/// Binary to C source and header.
///
/// Reads `input` from `skip` onward and overwrites both output paths.
fn embed(
    input: &Path,
    skip: u64,
    name: &Identifier,
    definition: &Path,
    declaration: &Path,
) -> anyhow::Result<usize> {
    let mut input_file = File::open(input)
        .with_context(|| format!("failed to open {}", input.display()))?;

    let size = input_file
        .metadata()
        .with_context(|| format!("failed to stat {}", input.display()))?
        .len();

    if skip > size {
        warn!(
            "--skip {} is past the end of the {} byte input, embedding an empty array",
            skip, size
        );
    }

    // Seeking past the end is fine, the read below just yields nothing
    // and the declared length clamps to zero.
    input_file.seek(SeekFrom::Start(skip))?;

    let mut data = Vec::new();
    input_file.read_to_end(&mut data)?;

    let mut definition_file = File::create(definition)
        .with_context(|| format!("failed to create {}", definition.display()))?;
    write_definition(&mut definition_file, name, &data)?;
    definition_file.flush()?;

    let mut declaration_file = File::create(declaration).with_context(|| {
        format!("failed to create {}", declaration.display())
    })?;
    write_declaration(&mut declaration_file, name, data.len())?;
    declaration_file.flush()?;

    Ok(data.len())
}
