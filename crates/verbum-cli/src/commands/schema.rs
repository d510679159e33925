use anyhow::Result;
use verbum_core::request::StudyMode;
use verbum_core::schema::schema_for;

pub fn print(mode: StudyMode) -> Result<()> {
    let schema = schema_for(mode).to_json();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
