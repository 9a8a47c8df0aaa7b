//! Assertions over the `--format json` output of `list`.
//!
//! Every helper reads the `content` envelope produced by the CLI:
//! `columns[].aria_sort`, `body.state`, `body.rows[]` and `status.kind`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Names of the rendered rows, in display order.
pub fn row_names(json: &Value) -> Result<Vec<String>> {
    let rows = json["content"]["body"]["rows"]
        .as_array()
        .context("Expected 'content.body.rows' array in JSON")?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            row["name"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Row {} missing name", i))
        })
        .collect()
}

/// Assert rendered row names, in order.
pub fn assert_row_names(json: &Value, expected: &[&str]) -> Result<()> {
    let names = row_names(json)?;
    if names != expected {
        anyhow::bail!("Expected rows {:?}, got {:?}", expected, names);
    }
    Ok(())
}

/// Assert the table body state: `loading`, `error`, `empty` or `populated`.
pub fn assert_body_state(json: &Value, expected: &str) -> Result<()> {
    let state = json["content"]["body"]["state"]
        .as_str()
        .context("Expected 'content.body.state' in JSON")?;
    if state != expected {
        anyhow::bail!("Expected body state {}, got {}", expected, state);
    }
    Ok(())
}

/// Assert the `aria_sort` value of every column, in display order.
pub fn assert_aria_sort(json: &Value, expected: [&str; 3]) -> Result<()> {
    let columns = json["content"]["columns"]
        .as_array()
        .context("Expected 'content.columns' array in JSON")?;

    let actual: Vec<&str> = columns
        .iter()
        .map(|c| c["aria_sort"].as_str().unwrap_or("<missing>"))
        .collect();
    if actual != expected {
        anyhow::bail!("Expected aria_sort {:?}, got {:?}", expected, actual);
    }
    Ok(())
}

/// Assert the status line data: `failed`, `filtered` or `total`.
pub fn assert_status(
    json: &Value,
    kind: &str,
    shown: Option<u64>,
    total: Option<u64>,
) -> Result<()> {
    let status = &json["content"]["status"];
    let actual = status["kind"]
        .as_str()
        .context("Expected 'content.status.kind' in JSON")?;
    if actual != kind {
        anyhow::bail!("Expected status {}, got {}", kind, actual);
    }
    if status["shown"].as_u64() != shown {
        anyhow::bail!("Expected shown {:?}, got {}", shown, status["shown"]);
    }
    if status["total"].as_u64() != total {
        anyhow::bail!("Expected total {:?}, got {}", total, status["total"]);
    }
    Ok(())
}
