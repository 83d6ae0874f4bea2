use std::error::Error;

use promptsearch::{search_source, DirectorySource};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let (data_dir, query) = match args.len() {
        0 => return Err("usage: prompt-search [data_dir] <query>".into()),
        1 => ("data".to_string(), args.remove(0)),
        _ => {
            let data_dir = args.remove(0);
            (data_dir, args.join(" "))
        }
    };

    let result = search_source(DirectorySource::new(data_dir), &query)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
