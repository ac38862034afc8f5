use super::*;

/// Counts the links of a chain one frame at a time, the way the emitter
/// walks member dependencies.
fn chain_length(links: &[usize], at: usize) -> usize {
    ensure_sufficient_stack(|| match links.get(at) {
        Some(&next) => 1 + chain_length(links, next),
        None => 0,
    })
}

#[test]
fn passes_through_the_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| "done"), "done");
    let result: Result<u8, String> = ensure_sufficient_stack(|| Err("failed".to_string()));
    assert_eq!(result, Err("failed".to_string()));
}

#[test]
fn short_chain() {
    let links = vec![1, 2, 3];
    assert_eq!(chain_length(&links, 0), 3);
}

#[test]
fn chain_deeper_than_the_main_thread_stack() {
    let links: Vec<usize> = (1..=200_000).collect();
    assert_eq!(chain_length(&links, 0), 200_000);
}

#[test]
fn runs_on_a_small_thread_stack() {
    let links: Vec<usize> = (1..=50_000).collect();
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(move || chain_length(&links, 0))
        .unwrap();
    assert_eq!(handle.join().unwrap(), 50_000);
}
