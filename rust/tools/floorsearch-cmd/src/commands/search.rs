use anyhow::{Context, Result};
use floorsearch::{
    IndexBase, NoTrace, SearchConfig, SearchTrace,
    host::{ElementKind, HostArray, search_host_arrays},
};

use crate::utils::{StderrTrace, read_array, write_json};

pub struct SearchArgs {
    pub list: String,
    pub items: String,
    pub kind: String,
    pub zero_based: bool,
    pub no_verify: bool,
    pub strict_items: bool,
    pub trace: bool,
    pub output: Option<String>,
}

pub fn run(args: SearchArgs) -> Result<()> {
    let kind: ElementKind = args
        .kind
        .parse()
        .with_context(|| format!("Invalid --kind value: {}", args.kind))?;

    let (list, items) = match kind {
        ElementKind::Float64 => (
            HostArray::Float64(read_array(&args.list)?),
            HostArray::Float64(read_array(&args.items)?),
        ),
        ElementKind::Int32 => (
            HostArray::Int32(read_array(&args.list)?),
            HostArray::Int32(read_array(&args.items)?),
        ),
    };

    let config = SearchConfig::default()
        .with_sequence_verification(!args.no_verify)
        .with_query_verification(args.strict_items)
        .with_index_base(if args.zero_based {
            IndexBase::Zero
        } else {
            IndexBase::One
        });

    let result = if args.trace {
        search(&list, &items, &config, &mut StderrTrace)?
    } else {
        search(&list, &items, &config, &mut NoTrace)?
    };

    let output = args.output.as_deref();
    match result {
        HostArray::Float64(indices) => write_json(&indices, output),
        HostArray::Int32(indices) => write_json(&indices, output),
    }
}

fn search<R>(
    list: &HostArray,
    items: &HostArray,
    config: &SearchConfig,
    trace: &mut R,
) -> Result<HostArray>
where
    R: SearchTrace<f64> + SearchTrace<i32>,
{
    search_host_arrays(list.view(), items.view(), config, trace).with_context(|| {
        format!(
            "Search failed for {} items over a list of {}",
            items.len(),
            list.len()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(dir: &TempDir, list: &str, items: &str, kind: &str) -> SearchArgs {
        let list_path = dir.path().join("list.json");
        let items_path = dir.path().join("items.json");
        fs::write(&list_path, list).unwrap();
        fs::write(&items_path, items).unwrap();
        SearchArgs {
            list: list_path.to_string_lossy().into_owned(),
            items: items_path.to_string_lossy().into_owned(),
            kind: kind.to_string(),
            zero_based: false,
            no_verify: false,
            strict_items: false,
            trace: false,
            output: Some(dir.path().join("out.json").to_string_lossy().into_owned()),
        }
    }

    fn read_output(dir: &TempDir) -> serde_json::Value {
        let text = fs::read_to_string(dir.path().join("out.json")).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_search_float64() {
        let dir = TempDir::new().unwrap();
        run(args(&dir, "[1, 3, 3, 5, 7]", "[1, 3, 6]", "f64")).unwrap();
        assert_eq!(read_output(&dir), serde_json::json!([1.0, 3.0, 4.0]));
    }

    #[test]
    fn test_search_int32_zero_based() {
        let dir = TempDir::new().unwrap();
        let mut a = args(&dir, "[10, 10, 10]", "[10]", "i32");
        a.zero_based = true;
        run(a).unwrap();
        assert_eq!(read_output(&dir), serde_json::json!([2]));
    }

    #[test]
    fn test_search_rejects_unsorted_list() {
        let dir = TempDir::new().unwrap();
        let err = run(args(&dir, "[3, 1]", "[2]", "i32")).unwrap_err();
        assert!(format!("{err:#}").contains("not sorted"));
    }

    #[test]
    fn test_search_no_verify() {
        let dir = TempDir::new().unwrap();
        let mut a = args(&dir, "[1, 3, 3, 5, 7]", "[0, 3, 6, 9]", "i32");
        a.no_verify = true;
        run(a).unwrap();
        assert_eq!(read_output(&dir), serde_json::json!([1, 3, 4, 5]));

        // Unverified input is taken as is: an unsorted list gives an answer, not an error.
        let mut a = args(&dir, "[5, 4, 3]", "[4]", "i32");
        a.no_verify = true;
        run(a).unwrap();
        assert_eq!(read_output(&dir), serde_json::json!([3]));
    }

    #[test]
    fn test_search_strict_items() {
        let dir = TempDir::new().unwrap();
        let mut a = args(&dir, "[0, 10, 20]", "[15, 5]", "i32");
        a.strict_items = true;
        assert!(run(a).is_err());
    }

    #[test]
    fn test_search_bad_kind() {
        let dir = TempDir::new().unwrap();
        assert!(run(args(&dir, "[1]", "[1]", "u8")).is_err());
    }

    #[test]
    fn test_search_missing_file() {
        let dir = TempDir::new().unwrap();
        let mut a = args(&dir, "[1]", "[1]", "f64");
        a.items = dir.path().join("missing.json").to_string_lossy().into_owned();
        let err = run(a).unwrap_err();
        assert!(err.to_string().contains("File does not exist"));
    }
}
