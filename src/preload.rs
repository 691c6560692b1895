/// Completion tracker for a batch of asset loads.
///
/// Successes and failures both count as settled. The batch yields its loaded
/// items, in the order they settled, once every attempt has settled.
#[derive(Debug)]
pub struct LoadBatch<T> {
    expected: usize,
    settled: usize,
    loaded: Vec<T>,
    done: bool,
}

impl<T> LoadBatch<T> {
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            settled: 0,
            loaded: Vec::with_capacity(expected),
            done: false,
        }
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn settled(&self) -> usize {
        self.settled
    }

    pub fn is_complete(&self) -> bool {
        self.settled >= self.expected
    }

    /// Record a successful load. Returns the batch result when this was the last attempt.
    pub fn succeed(&mut self, item: T) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        self.loaded.push(item);
        self.settle()
    }

    /// Record a failed load. Returns the batch result when this was the last attempt.
    pub fn fail(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        self.settle()
    }

    /// Whatever has loaded so far, ending the batch.
    pub fn into_loaded(self) -> Vec<T> {
        self.loaded
    }

    fn settle(&mut self) -> Option<Vec<T>> {
        self.settled += 1;
        if self.is_complete() {
            self.done = true;
            Some(std::mem::take(&mut self.loaded))
        } else {
            None
        }
    }
}
