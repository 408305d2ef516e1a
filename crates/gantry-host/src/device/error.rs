/// What the runtime should do after a failed frame acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface was reconfigured; render again next frame.
    Reconfigured,
    /// Transient failure; skip this frame and carry on.
    SkipFrame,
    /// Unrecoverable failure; shut the loop down.
    Fatal,
}
