//! Basic dependency inversion: a high level demo over self-announcing parts.
//!
//! The definitions of `First` and `Second` can change in any way compatible
//! with [`Say`] without affecting `SayDemo<T>`.

pub type Byte = u16;

pub trait Say {
    fn create() -> Self;
    fn set_id(&mut self, id: Byte);
    fn get_id(&self) -> Byte;
    fn say(&self) -> String;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct First {
    id: Byte,
}

impl Say for First {
    fn create() -> Self {
        First { id: 0 }
    }
    fn set_id(&mut self, id: Byte) {
        self.id = id;
    }
    fn get_id(&self) -> Byte {
        self.id
    }
    fn say(&self) -> String {
        format!("First here with id = {}", self.id)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Second {
    id: Byte,
}

impl Say for Second {
    fn create() -> Self {
        Second { id: 0 }
    }
    fn set_id(&mut self, id: Byte) {
        self.id = id;
    }
    fn get_id(&self) -> Byte {
        self.id
    }
    fn say(&self) -> String {
        format!("Second here with id = {}", self.id)
    }
}

#[derive(Debug)]
pub struct SayDemo<T: Say> {
    my_say: T,
}

impl<T: Say> SayDemo<T> {
    pub fn new() -> Self {
        Self { my_say: T::create() }
    }

    pub fn set_id(&mut self, id: Byte) {
        self.my_say.set_id(id);
    }

    pub fn get_id(&self) -> Byte {
        self.my_say.get_id()
    }

    pub fn say_it(&self) -> String {
        format!("Demo with id {} here\n{}", self.get_id(), self.my_say.say())
    }
}

impl<T: Say> Default for SayDemo<T> {
    fn default() -> Self {
        Self::new()
    }
}
