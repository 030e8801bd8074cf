use crate::ctx::ResponseCtx;

/// Terminal signal returned to the host's routing layer.
///
/// Redirect dispatch never exits the process; it produces a complete
/// response and hands it back as `Handled`, which tells the host to skip
/// any default page for this request.
#[derive(Debug)]
pub enum RouteOutcome {
    /// The request matched a legacy shape; serve this response and stop routing
    Handled(ResponseCtx),

    /// No legacy shape matched; continue with the host's default routing
    PassThrough,
}

impl RouteOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, RouteOutcome::Handled(_))
    }

    /// The response carried by `Handled`, if any.
    pub fn response(&self) -> Option<&ResponseCtx> {
        match self {
            RouteOutcome::Handled(res) => Some(res),
            RouteOutcome::PassThrough => None,
        }
    }
}
