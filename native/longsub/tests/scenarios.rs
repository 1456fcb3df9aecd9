//! End-to-end scenarios: parse, build, condense, search.

use longsub::{
    Automaton, AutomatonError, Edge, InputError, LongestSubstringFinder, Problem,
    longest_accepted_substring,
};

fn solve(text: &str) -> String {
    let problem = Problem::parse(text).unwrap();
    let condensed = problem.automaton().unwrap().condense();
    longest_accepted_substring(&condensed, &problem.word)
}

#[test]
fn ab_plus_in_noise() {
    assert_eq!(solve("2 2 1\n1\n0 a 1\n1 b 1\nxxabbbyy\n"), "abbb");
}

#[test]
fn epsilon_self_loop_without_terminals() {
    assert_eq!(solve("1 1 0\n0 $ 0\nabcabc\n"), "");
}

#[test]
fn no_terminal_reachable_from_init() {
    // 1 is terminal but nothing leads there
    assert_eq!(solve("2 1 1\n1\n1 a 1\naaaa\n"), "");
}

#[test]
fn epsilon_cycles_in_the_input_collapse() {
    // 0 <-ε-> 1 -ε-> 2 <-ε-> 3, 0 -x-> 3, 3 -y-> 0, 2 final
    let text = "4 7 1\n2\n\
                0 $ 1\n1 $ 0\n1 $ 2\n2 $ 3\n3 $ 2\n0 x 3\n3 y 0\n\
                zxyxyxz\n";
    assert_eq!(solve(text), "xyxyx");
}

#[test]
fn uppercase_label_is_rejected() {
    let problem = Problem::parse("2 1 1\n1\n0 B 1\nbb\n").unwrap();
    assert_eq!(
        problem.automaton().unwrap_err(),
        AutomatonError::InvalidLabel { label: 'B' }
    );
}

#[test]
fn truncated_input_is_rejected() {
    assert!(matches!(
        Problem::parse("3 2 1\n2\n0 a 1\n"),
        Err(InputError::UnexpectedEof { .. })
    ));
}

#[test]
fn reconstructed_text_replays_to_a_terminal() {
    // (ab|c)* with an epsilon detour, 0 final
    let automaton = Automaton::build(
        4,
        [
            Edge::new(0, 'a', 1),
            Edge::new(1, 'b', 2),
            Edge::new(2, '$', 0),
            Edge::new(0, '$', 3),
            Edge::new(3, 'c', 0),
        ],
        [0],
    )
    .unwrap();
    let condensed = automaton.condense();
    let word = "bbabcabccabaab";

    let found = LongestSubstringFinder::new(&condensed, word)
        .find()
        .cloned()
        .unwrap();
    assert_eq!(found.text, "abcabccab");
    assert_eq!(&word[found.start..found.end()], found.text);
    assert!(automaton.accepts(&found.text));
    assert!(condensed.accepts(&found.text));
}

#[test]
fn long_word_with_long_epsilon_chain() {
    // 0 -ε-> 1 -ε-> ... -ε-> n-1 -a-> 0, n-1 final
    let n = 2_000u32;
    let mut edges: Vec<Edge> = (0..n - 1).map(|v| Edge::new(v, '$', v + 1)).collect();
    edges.push(Edge::new(n - 1, 'a', 0));
    let automaton = Automaton::build(n as usize, edges, [n - 1]).unwrap();
    let condensed = automaton.condense();
    assert_eq!(condensed.num_vertices(), n as usize);

    let word = format!("b{}b", "a".repeat(300));
    assert_eq!(longest_accepted_substring(&condensed, &word), "a".repeat(300));
}
