/// Fixed-capacity inline vector for short candidate lists (a player owns at
/// most four tokens, so heap allocation never pays off here).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TinyVec<T, const N: usize> {
    data: [Option<T>; N],
    len: u8,
}

impl<T, const N: usize> TinyVec<T, N>
where
    T: Copy + PartialEq,
{
    pub const fn new() -> Self {
        const { assert!(N <= 255, "TinyVec supports up to 255 elements") }
        TinyVec {
            data: [const { None }; N],
            len: 0,
        }
    }

    pub fn push(&mut self, value: T) {
        if self.len as usize >= N {
            panic!("TinyVec is full");
        }
        self.data[self.len as usize] = Some(value);
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len as usize {
            self.data[index].as_ref()
        } else {
            None
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter().take(self.len as usize).flatten()
    }
}

impl<T, const N: usize> Default for TinyVec<T, N>
where
    T: Copy + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}
