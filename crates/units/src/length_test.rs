mod tests {
    use approx::assert_relative_eq;

    use crate::length::Length;

    #[test]
    fn test_length_arithmetic() {
        let a = Length::from_au(5.0);
        let b = Length::from_au(3.0);

        assert_relative_eq!((a - b).to_au(), 2.0);
        assert_relative_eq!((a * 2.0).to_au(), 10.0);
        assert_relative_eq!((a / 2.0).to_au(), 2.5);
    }

    #[test]
    fn test_length_max_and_ordering() {
        let a = Length::from_au(5.0);
        let b = Length::from_au(3.0);

        assert_relative_eq!(a.max(b).to_au(), 5.0);
        assert_relative_eq!(b.max(a).to_au(), 5.0);
        assert!(b < a);
        assert!(a <= a);
    }
}
