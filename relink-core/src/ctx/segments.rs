use percent_encoding::percent_decode_str;
use smallvec::SmallVec;

/// Ordered `/`-delimited components of a legacy request path.
///
/// Legacy handlers index into fixed positions, so out-of-range access
/// yields the empty string instead of panicking; an empty string is a valid
/// segment value and is not the same as "absent" for matching purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments(SmallVec<[String; 4]>);

impl Segments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `path` on `/` after trimming a single leading slash.
    ///
    /// Each segment is percent-decoded, matching what handlers saw once the
    /// host's rewrite layer was done with the path. Interior and trailing
    /// empty segments are preserved (`a//b`, `a/b/`); invalid encodings
    /// degrade to the raw segment text.
    pub fn from_path(path: &str) -> Self {
        let body = path.strip_prefix('/').unwrap_or(path);

        if body.is_empty() {
            return Self::default();
        }

        Self(body.split('/').map(decode_segment).collect())
    }

    /// Segment at `index`, or `""` when the path is too short.
    pub fn get(&self, index: usize) -> &str {
        self.0.get(index).map(String::as_str).unwrap_or("")
    }

    /// Extends with empty strings until at least `len` entries exist.
    pub fn pad_to(&mut self, len: usize) {
        while self.0.len() < len {
            self.0.push(String::new());
        }
    }

    pub fn join(&self) -> String {
        self.0.join("/")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

impl<S: Into<String>> FromIterator<S> for Segments {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
