use mailbridge::ProviderKind;

use crate::OutputFormat;

pub fn run(format: &OutputFormat) -> anyhow::Result<()> {
    let names: Vec<&str> = ProviderKind::ALL.iter().map(|kind| kind.as_str()).collect();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        OutputFormat::Text => {
            for name in names {
                println!("{name}");
            }
        }
    }
    Ok(())
}
