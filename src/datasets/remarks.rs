use std::path::Path;

use async_trait::async_trait;

use crate::utils::files::read_file;

use super::LoadableDataset;

/// The name of the plain remarks dataset
pub static DATASET: &str = "remarks";

/// Remarks read one per line from a text file
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Remarks {
    lines: Vec<String>,
}

impl Remarks {
    /// Every line of the file, including blank ones
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines that hold an actual remark
    pub fn non_blank(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|line| !line.trim().is_empty())
            .collect()
    }
}

impl From<Vec<String>> for Remarks {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

#[async_trait]
impl LoadableDataset for Remarks {
    async fn load(path: &Path) -> anyhow::Result<Self> {
        let lines = read_file(path)
            .await
            .map_err(|e| anyhow!("Unable to read remarks file {}: {}", path.display(), e))?;

        log::info!("Loaded {} lines from {}", lines.len(), path.display());

        Ok(Self { lines })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn loads_lines_and_skips_blanks() {
        let path = std::env::temp_dir().join("proev-remarks-remarks-test.txt");
        tokio::fs::write(&path, "Excellent teacher\n\n   \nTerrible explanations\n")
            .await
            .unwrap();

        let remarks = Remarks::load(&path).await.unwrap();

        assert_eq!(remarks.lines().len(), 4);
        assert_eq!(
            remarks.non_blank(),
            vec!["Excellent teacher", "Terrible explanations"]
        );

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
