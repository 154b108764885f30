pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_walks_the_full_row_range() {
        assert_eq!(wrap_increment(0, 12), 1);
        assert_eq!(wrap_increment(11, 12), 0);
        assert_eq!(wrap_decrement(0, 12), 11);
        assert_eq!(wrap_decrement(1, 12), 0);
        assert_eq!(wrap_increment(5, 0), 0);
    }
}
