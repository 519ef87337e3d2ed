use super::{traverse, Flow, Visitor};
use crate::Node;
use pretty_assertions::assert_eq;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    Pre(i32),
    Descend,
    Ascend,
    Post(i32),
}

/// Records every hook invocation and lets each test steer the walk by mapping the freshly
/// recorded event to a [`Flow`] signal.
struct Recorder<F> {
    events: Vec<Event>,
    steer: F,
}
impl<F: FnMut(&Event) -> Flow> Recorder<F> {
    fn new(steer: F) -> Self {
        Self {
            events: Vec::new(),
            steer,
        }
    }
    fn record(&mut self, event: Event) -> Flow {
        self.events.push(event);
        (self.steer)(self.events.last().expect("just pushed"))
    }
}
impl<F: FnMut(&Event) -> Flow> Visitor<'_, i32> for Recorder<F> {
    fn pre_visit(&mut self, node: &Node<i32>) -> Flow {
        self.record(Event::Pre(*node.payload()))
    }
    fn descend(&mut self) -> Flow {
        self.record(Event::Descend)
    }
    fn ascend(&mut self) -> Flow {
        self.record(Event::Ascend)
    }
    fn post_visit(&mut self, node: &Node<i32>) -> Flow {
        self.record(Event::Post(*node.payload()))
    }
}

/// Top-level list `1 ── 2 ── 3`, with `1 → [11 → [111], 12]` and `2 → [21, 22]`.
fn sample() -> Node<i32> {
    let mut n1 = Node::new(1);
    n1.prepend_child(Node::new(12)).expect("fresh singleton");
    let n11 = n1.prepend_child(Node::new(11)).expect("fresh singleton");
    n11.prepend_child(Node::new(111)).expect("fresh singleton");

    let mut n2 = Node::new(2);
    n2.prepend_child(Node::new(22)).expect("fresh singleton");
    n2.prepend_child(Node::new(21)).expect("fresh singleton");
    n2.append(Node::new(3)).expect("empty sibling slot");
    n1.append(n2).expect("empty sibling slot");
    n1
}

#[test]
fn absent_root_is_a_noop() {
    let mut recorder = Recorder::new(|_| Flow::Continue);
    assert_eq!(traverse::<i32, _>(None, &mut recorder), Flow::Continue);
    assert!(recorder.events.is_empty());
}

#[test]
fn full_walk_visits_in_child_then_sibling_order() {
    use Event::*;
    let tree = sample();
    let mut recorder = Recorder::new(|_| Flow::Continue);
    assert_eq!(tree.traverse(&mut recorder), Flow::Continue);
    assert_eq!(
        recorder.events,
        [
            Pre(1),
            Descend,
            Pre(11),
            Descend,
            Pre(111),
            Post(111),
            Ascend,
            Post(11),
            Pre(12),
            Post(12),
            Ascend,
            Post(1),
            Pre(2),
            Descend,
            Pre(21),
            Post(21),
            Pre(22),
            Post(22),
            Ascend,
            Post(2),
            Pre(3),
            Post(3),
        ]
    );
}

#[test]
fn hooks_run_in_matched_pairs() {
    let tree = sample();
    let mut recorder = Recorder::new(|_| Flow::Continue);
    tree.traverse(&mut recorder);
    let count = |matcher: fn(&Event) -> bool| recorder.events.iter().filter(|e| matcher(e)).count();
    assert_eq!(
        count(|e| matches!(e, Event::Pre(_))),
        count(|e| matches!(e, Event::Post(_))),
    );
    assert_eq!(
        count(|e| matches!(e, Event::Descend)),
        count(|e| matches!(e, Event::Ascend)),
    );
}

#[test]
fn skip_node_drops_its_subtree_and_post_only() {
    use Event::*;
    let tree = sample();
    let mut recorder = Recorder::new(|event| {
        if *event == Pre(11) {
            Flow::SkipNode
        } else {
            Flow::Continue
        }
    });
    assert_eq!(tree.traverse(&mut recorder), Flow::Continue);
    // 11 is neither descended into nor post-visited, but its sibling 12 is still reached
    assert!(!recorder.events.contains(&Pre(111)));
    assert!(!recorder.events.contains(&Post(11)));
    assert!(recorder.events.contains(&Pre(12)));
    assert!(recorder.events.contains(&Post(1)));
    assert!(recorder.events.contains(&Pre(3)));
}

#[test]
fn skip_siblings_is_level_local() {
    use Event::*;
    let tree = sample();
    let mut recorder = Recorder::new(|event| {
        if *event == Pre(11) {
            Flow::SkipSiblings
        } else {
            Flow::Continue
        }
    });
    // abandoning a level is not a failure of the overall walk
    assert_eq!(tree.traverse(&mut recorder), Flow::Continue);
    // 11's remaining level is gone, 12 included...
    assert!(!recorder.events.contains(&Pre(12)));
    assert!(!recorder.events.contains(&Post(11)));
    // ...but the parent still ascends and post-visits, and *its* later siblings are untouched
    assert_eq!(
        recorder.events,
        [Pre(1), Descend, Pre(11), Ascend, Post(1), Pre(2), Descend, Pre(21), Post(21), Pre(22), Post(22), Ascend, Post(2), Pre(3), Post(3)],
    );
}

#[test]
fn abort_unwinds_through_every_frame() {
    use Event::*;
    let tree = sample();
    let mut recorder = Recorder::new(|event| {
        if *event == Pre(111) {
            Flow::Abort
        } else {
            Flow::Continue
        }
    });
    assert_eq!(tree.traverse(&mut recorder), Flow::Abort);
    // nothing at all runs after the aborting hook, ascents included
    assert_eq!(recorder.events, [Pre(1), Descend, Pre(11), Descend, Pre(111)]);
}

#[test]
fn refused_descend_skips_the_subtree_and_post() {
    use Event::*;
    let tree = sample();
    let mut refusals = 0;
    let mut recorder = Recorder::new(|event| {
        if *event == Descend && refusals == 0 {
            refusals += 1;
            Flow::SkipNode
        } else {
            Flow::Continue
        }
    });
    assert_eq!(tree.traverse(&mut recorder), Flow::Continue);
    // node 1's children are never entered and its post-visit is skipped
    assert!(!recorder.events.contains(&Pre(11)));
    assert!(!recorder.events.contains(&Post(1)));
    // the sibling loop continues, and node 2's descend is granted normally
    assert!(recorder.events.contains(&Pre(21)));
    assert!(recorder.events.contains(&Post(2)));
}

#[test]
fn abort_from_ascend_propagates() {
    use Event::*;
    let tree = sample();
    let mut recorder = Recorder::new(|event| {
        if *event == Ascend {
            Flow::Abort
        } else {
            Flow::Continue
        }
    });
    assert_eq!(tree.traverse(&mut recorder), Flow::Abort);
    // the first ascend happens at node 11, whose post-visit must not run
    assert_eq!(
        recorder.events,
        [Pre(1), Descend, Pre(11), Descend, Pre(111), Post(111), Ascend],
    );
}

#[test]
fn skip_siblings_from_post_visit_ends_the_level() {
    use Event::*;
    let tree = sample();
    let mut recorder = Recorder::new(|event| {
        if *event == Post(21) {
            Flow::SkipSiblings
        } else {
            Flow::Continue
        }
    });
    assert_eq!(tree.traverse(&mut recorder), Flow::Continue);
    // 21's later sibling is abandoned, yet node 2 still completes and 3 is visited
    assert!(!recorder.events.contains(&Pre(22)));
    assert!(recorder.events.contains(&Post(2)));
    assert!(recorder.events.contains(&Pre(3)));
}

#[test]
fn visitor_behind_a_mutable_reference_still_drives() {
    let tree = sample();
    let mut recorder = Recorder::new(|_| Flow::Continue);
    let by_ref: &mut Recorder<_> = &mut recorder;
    assert_eq!(traverse(Some(&tree), &mut &mut *by_ref), Flow::Continue);
    assert_eq!(recorder.events.len(), 22);
}

#[test]
fn severity_order_is_total() {
    assert!(Flow::Continue < Flow::SkipNode);
    assert!(Flow::SkipNode < Flow::SkipSiblings);
    assert!(Flow::SkipSiblings < Flow::Abort);
}
