use life_engine::GameOfLife;

#[test]
fn perf_smoke_step() {
    let mut game = GameOfLife::with_seed(128, 64, 42);
    game.enable_perf_metrics(true);
    game.randomize();
    game.next_generation();

    let stats = game.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.cells_processed(), 128 * 64);
    assert_eq!(stats.population(), game.population());
    assert_eq!(stats.generation(), 1);
}

#[test]
fn perf_smoke_render() {
    let mut game = GameOfLife::with_seed(100, 100, 42);
    game.randomize();
    for _ in 0..10 {
        game.next_generation();
        game.render();
    }
    assert_eq!(game.pixels_len(), 1000 * 1000);
    assert_eq!(game.generation(), 10);
}
