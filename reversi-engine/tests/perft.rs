use reversi_engine::test_utils::run_perft;

#[test]
fn perft_1() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_3() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_6() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_7() {
    assert_eq!(run_perft(7), 55092);
}
