use crate::records::{PageLinksRecord, SeedRecord};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Read the ordered sequence of seed records driving stage one
pub fn read_seeds<P: AsRef<Path>>(path: P) -> Result<Vec<SeedRecord>, Box<dyn Error>> {
    read_records(path)
}

/// Read stage-one output back as stage-two input
pub fn read_page_links<P: AsRef<Path>>(path: P) -> Result<Vec<PageLinksRecord>, Box<dyn Error>> {
    read_records(path)
}

fn read_records<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<Vec<T>, Box<dyn Error>> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let records: Vec<T> = serde_json::from_str(&contents)?;
    Ok(records)
}

/// Write records as pretty-printed JSON, in full. A run writes its output
/// exactly once, at the end; failed runs write nothing.
pub fn write_records<P: AsRef<Path>, T: Serialize>(
    path: P,
    records: &[T],
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_page_links() {
        let path = std::env::temp_dir().join("notice-harvest-store-test.json");

        let records = vec![PageLinksRecord {
            heading: "Cat1".to_string(),
            link: url::Url::parse("http://x/1").unwrap(),
            page_links: vec![crate::records::LinkEntry {
                name: "Item1".to_string(),
                link: url::Url::parse("http://x/item1").unwrap(),
            }],
        }];

        write_records(&path, &records).unwrap();
        let read_back = read_page_links(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(read_back.len(), 1);
        assert_eq!(read_back[0].heading, "Cat1");
        assert_eq!(read_back[0].page_links, records[0].page_links);
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let missing = std::env::temp_dir().join("notice-harvest-no-such-file.json");
        assert!(read_seeds(&missing).is_err());
    }
}
