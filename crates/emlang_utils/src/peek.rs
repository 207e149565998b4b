pub trait Peek: Iterator {
    fn peek(&self) -> Option<Self::Item>;

    fn eat_if(&mut self, pred: impl FnOnce(&Self::Item) -> bool) -> Option<Self::Item> {
        match self.peek() {
            Some(item) if pred(&item) => {
                self.next();
                Some(item)
            }
            _ => None,
        }
    }

    fn eat_while(&mut self, mut pred: impl FnMut(&Self::Item) -> bool) -> usize {
        let mut eaten = 0;
        while self.eat_if(&mut pred).is_some() {
            eaten += 1;
        }
        eaten
    }

    fn at_end(&self) -> bool {
        self.peek().is_none()
    }
}

impl Peek for std::str::Chars<'_> {
    fn peek(&self) -> Option<Self::Item> {
        self.clone().next()
    }
}

#[cfg(test)]
mod tests {
    use super::Peek;

    #[test]
    fn peek_does_not_advance() {
        let chars = "ab".chars();
        assert_eq!(chars.peek(), Some('a'));
        assert_eq!(chars.peek(), Some('a'));
        assert_eq!(chars.as_str(), "ab");
    }

    #[test]
    fn eat_if_only_consumes_on_match() {
        let mut chars = "ab".chars();
        assert_eq!(chars.eat_if(|&ch| ch == 'b'), None);
        assert_eq!(chars.eat_if(|&ch| ch == 'a'), Some('a'));
        assert_eq!(chars.as_str(), "b");
    }

    #[test]
    fn eat_while_stops_at_first_mismatch() {
        let mut chars = "123abc".chars();
        assert_eq!(chars.eat_while(char::is_ascii_digit), 3);
        assert_eq!(chars.as_str(), "abc");

        assert_eq!(chars.eat_while(char::is_ascii_digit), 0);
        assert!(!chars.at_end());

        chars.eat_while(|_| true);
        assert!(chars.at_end());
    }
}
