use std::error::Error as StdError;
use std::fmt;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Several errors reported as one.
///
/// Chain traversal visits every branch, so a target wrapped by any of the
/// joined errors is found.
#[derive(Debug)]
pub struct Joined {
    errors: Vec<BoxError>,
}

impl Joined {
    pub fn errors(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        self.errors
            .iter()
            .map(|e| &**e as &(dyn StdError + 'static))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for Joined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl StdError for Joined {}

/// Join errors into a single error whose chain includes all of them
pub fn join<I, E>(errors: I) -> Joined
where
    I: IntoIterator<Item = E>,
    E: Into<BoxError>,
{
    Joined {
        errors: errors.into_iter().map(Into::into).collect(),
    }
}

/// Walk the wrap chain of `err`, fanning out into joined errors, until
/// `visit` returns true
pub fn walk<'a>(
    err: &'a (dyn StdError + 'static),
    visit: &mut dyn FnMut(&'a (dyn StdError + 'static)) -> bool,
) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if visit(e) {
            return true;
        }
        if let Some(joined) = e.downcast_ref::<Joined>()
            && joined.errors().any(|branch| walk(branch, visit))
        {
            return true;
        }
        current = e.source();
    }
    false
}

/// Whether the chain of `err` contains an error equal to `target`
pub fn error_is<E>(err: &(dyn StdError + 'static), target: &E) -> bool
where
    E: StdError + PartialEq + 'static,
{
    walk(err, &mut |e| e.downcast_ref::<E>() == Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, thiserror::Error)]
    enum Sentinel {
        #[error("ooh")]
        Ooh,
        #[error("ooh1")]
        Ooh1,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("wrapped")]
    struct Wrapped(#[source] Sentinel);

    #[test]
    fn test_direct_match() {
        assert!(error_is(&Sentinel::Ooh, &Sentinel::Ooh));
        assert!(!error_is(&Sentinel::Ooh, &Sentinel::Ooh1));
    }

    #[test]
    fn test_source_chain() {
        let err = Wrapped(Sentinel::Ooh);
        assert!(error_is(&err, &Sentinel::Ooh));
        assert!(!error_is(&err, &Sentinel::Ooh1));
    }

    #[test]
    fn test_joined_branches() {
        let err = join([Sentinel::Ooh1, Sentinel::Ooh]);
        assert_eq!(err.len(), 2);
        assert!(error_is(&err, &Sentinel::Ooh));
        assert!(error_is(&err, &Sentinel::Ooh1));
        assert_eq!(err.to_string(), "ooh1\nooh");
    }

    #[test]
    fn test_nested_join_behind_wrapper() {
        #[derive(Debug, thiserror::Error)]
        #[error("context")]
        struct Context(#[source] Joined);

        let inner: Vec<BoxError> = vec![
            Box::new(Wrapped(Sentinel::Ooh)),
            Box::new(Sentinel::Ooh1),
        ];
        let err = Context(join(inner));
        assert!(error_is(&err, &Sentinel::Ooh));
    }

    #[test]
    fn test_anyhow_context_chain() {
        let err = anyhow::Error::new(Sentinel::Ooh).context("reading config");
        let root: &(dyn StdError + 'static) = err.as_ref();
        assert!(error_is(root, &Sentinel::Ooh));
    }
}
