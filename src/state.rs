use crate::sequence_ref::{CurrentSource, SequenceRef};

pub trait AppState: Clone + Send + Sync + 'static {
    type Source: CurrentSource + Send + Sync;

    fn sequence(&self) -> Self::Source;
}

#[derive(Clone)]
pub struct LiveState {
    pub sequence: SequenceRef,
}

impl AppState for LiveState {
    type Source = SequenceRef;

    fn sequence(&self) -> SequenceRef {
        self.sequence.clone()
    }
}
