use std::collections::BTreeMap;

/// Answer type name mapped to a human readable description.
pub type AnswerCatalog = BTreeMap<&'static str, &'static str>;

pub const BEST: &str = "best";

/// Catalog entry every goal provides.
pub fn best_only() -> AnswerCatalog {
    AnswerCatalog::from([(
        BEST,
        "Point estimate of the best guess at an answer, in the same form it was provided for training.",
    )])
}

/// Which answer type(s) a caller wants from [`crate::goals::Goal::answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerRequest<'a> {
    One(&'a str),
    Many(&'a [&'a str]),
}

impl<'a> AnswerRequest<'a> {
    pub fn names(&self) -> &[&'a str] {
        match self {
            AnswerRequest::One(name) => std::slice::from_ref(name),
            AnswerRequest::Many(names) => names,
        }
    }

    /// Applies `f` to every requested name, keeping the shape of the request.
    pub fn try_map<A, E>(
        &self,
        mut f: impl FnMut(&str) -> Result<A, E>,
    ) -> Result<AnswerOutput<A>, E> {
        match self {
            AnswerRequest::One(name) => f(*name).map(AnswerOutput::One),
            AnswerRequest::Many(names) => names
                .iter()
                .map(|name| f(*name))
                .collect::<Result<Vec<_>, E>>()
                .map(AnswerOutput::Many),
        }
    }
}

impl<'a> From<&'a str> for AnswerRequest<'a> {
    fn from(name: &'a str) -> Self {
        AnswerRequest::One(name)
    }
}

impl<'a> From<&'a [&'a str]> for AnswerRequest<'a> {
    fn from(names: &'a [&'a str]) -> Self {
        AnswerRequest::Many(names)
    }
}

/// A single answer, or answers aligned with a list request.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutput<A> {
    One(A),
    Many(Vec<A>),
}

impl<A> AnswerOutput<A> {
    pub fn map<B>(self, mut f: impl FnMut(A) -> B) -> AnswerOutput<B> {
        match self {
            AnswerOutput::One(a) => AnswerOutput::One(f(a)),
            AnswerOutput::Many(v) => AnswerOutput::Many(v.into_iter().map(f).collect()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AnswerOutput::One(_) => false,
            AnswerOutput::Many(v) => v.is_empty(),
        }
    }

    pub fn into_one(self) -> Option<A> {
        match self {
            AnswerOutput::One(a) => Some(a),
            AnswerOutput::Many(_) => None,
        }
    }

    pub fn into_many(self) -> Vec<A> {
        match self {
            AnswerOutput::One(a) => vec![a],
            AnswerOutput::Many(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_request_yields_single_output() {
        let req = AnswerRequest::from("best");
        assert_eq!(req.names(), &["best"]);
        let out = req.try_map(|name| Ok::<_, ()>(name.len())).unwrap();
        assert_eq!(out, AnswerOutput::One(4));
        assert!(!out.is_empty());
    }

    #[test]
    fn list_request_keeps_order() {
        let names = ["prob", "best"];
        let req = AnswerRequest::from(&names[..]);
        assert_eq!(req.names(), &["prob", "best"]);
        let out = req
            .try_map(|name| Ok::<_, ()>(name.to_string()))
            .unwrap()
            .map(|name| name.to_uppercase());
        assert_eq!(out.clone().into_one(), None);
        assert_eq!(out.into_many(), vec!["PROB", "BEST"]);
    }

    #[test]
    fn first_failing_name_stops_the_mapping() {
        let names = ["best", "mode", "median"];
        let mut seen = Vec::new();
        let err = AnswerRequest::Many(&names)
            .try_map(|name| {
                seen.push(name.to_string());
                if name == "best" { Ok(0) } else { Err(name.to_string()) }
            })
            .unwrap_err();
        assert_eq!(err, "mode");
        assert_eq!(seen, vec!["best", "mode"]);
        assert!(AnswerRequest::Many(&[]).try_map(|_| Ok::<u8, ()>(0)).unwrap().is_empty());
    }

    #[test]
    fn best_is_always_catalogued() {
        assert!(best_only().contains_key(BEST));
    }
}
