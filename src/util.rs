use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub fn short_name(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}

pub fn stable_pair(id: &str) -> (f32, f32) {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    let hash = hasher.finish();

    let x = ((hash & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    let y = (((hash >> 32) & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    ((x * 2.0) - 1.0, (y * 2.0) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_takes_the_last_path_segment() {
        assert_eq!(short_name("/etc/clientlibs/site/base"), "base");
        assert_eq!(short_name("cq.widgets"), "cq.widgets");
    }

    #[test]
    fn stable_pair_is_deterministic_and_bounded() {
        let (x, y) = stable_pair("/etc/clientlibs/site/base");
        assert_eq!(stable_pair("/etc/clientlibs/site/base"), (x, y));
        assert!((-1.0..=1.0).contains(&x));
        assert!((-1.0..=1.0).contains(&y));
    }
}
