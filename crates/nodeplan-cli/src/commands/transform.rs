use nodeplan_core::{PlanMeta, PlanType};
use nodeplan_static::transform_static_output;
use std::path::Path;

pub fn transform(
    image: &str,
    workdir: &Path,
    plan_type: PlanType,
    meta_pairs: &[String],
) -> anyhow::Result<()> {
    let meta = parse_meta(meta_pairs)?;

    let static_dir = transform_static_output(image, workdir, &meta, plan_type)?;

    println!("Static output staged at {}", static_dir.display());
    Ok(())
}

fn parse_meta(pairs: &[String]) -> anyhow::Result<PlanMeta> {
    let mut meta = PlanMeta::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected KEY=VALUE format, got {pair:?}"))?;
        meta.insert(key, value);
    }
    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_meta_pairs() {
        let meta = parse_meta(&["framework=hexo".to_owned(), "outputDir=public".to_owned()])
            .unwrap();
        assert_eq!(meta.framework(), "hexo");
        assert_eq!(meta.output_dir(), "public");
    }

    #[test]
    fn parse_meta_value_may_contain_equals() {
        let meta = parse_meta(&["outputDir=a=b".to_owned()]).unwrap();
        assert_eq!(meta.output_dir(), "a=b");
    }

    #[test]
    fn parse_meta_rejects_missing_equals() {
        let err = parse_meta(&["framework".to_owned()]).unwrap_err().to_string();
        assert!(err.contains("KEY=VALUE"), "got: {err}");
    }
}
