use crate::timing::*;
use std::io::prelude::*;

pub const HEADER: &str = "version,num_steps,model_size,time";

pub fn write_records<W: Write>(
    output: &mut W,
    records: &[TimingRecord],
) -> std::io::Result<()> {
    writeln!(output, "{HEADER}")?;
    for r in records {
        writeln!(
            output,
            "{},{},{},{:e}",
            r.version, r.num_steps, r.model_size, r.seconds
        )?;
    }
    Ok(())
}

pub fn write_csv<P: AsRef<std::path::Path>>(
    records: &[TimingRecord],
    path: &P,
) -> std::io::Result<()> {
    tracing::info!("Writing: {:?}", path.as_ref());
    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_records(&mut output, records)?;
    output.flush()
}
