//! Build-up names must stay unique within the collection; collisions are
//! resolved with a suffix increment ("Wall", "Wall (2)", "Wall (3)", ...).

pub fn unique_name<'a, I>(existing: I, desired: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: Vec<&str> = existing.into_iter().collect();
    if !taken.contains(&desired) {
        return desired.to_string();
    }
    let mut n = 2u32;
    loop {
        let candidate = format!("{desired} ({n})");
        if !taken.iter().any(|t| *t == candidate) {
            return candidate;
        }
        n += 1;
    }
}
