/// Stateless queries over caller-owned user lists.
///
/// Every operation borrows its input, never mutates it and never fails.
/// Empty input yields an empty result, `None`, or the documented sentinel.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserQueryService;

impl UserQueryService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}
