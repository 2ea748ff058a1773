use std::rc::Rc;

use blockdeque::BlockDeque;

fn values<const W: usize>(x: &BlockDeque<i32, W>) -> Vec<i32> {
    x.iter().copied().collect()
}

#[test]
fn test_insert_before_position() {
    let mut x: BlockDeque<i32> = BlockDeque::from_elem(10, 100);
    let it = x.begin() + 5;
    let at = x.insert_before(it, 99);
    assert_eq!(x.len(), 11);
    assert_eq!(x[5], 99);
    assert_eq!(x.get_at(at), Some(&99));
    assert_eq!(x.iter().filter(|&&v| v == 100).count(), 10);
}

#[test]
fn test_insert_and_erase_at_boundaries() {
    let reference: Vec<i32> = (0..45).collect();
    let mut x: BlockDeque<i32> = reference.iter().copied().collect();

    // at begin
    x.insert_before(x.begin(), -1);
    assert_eq!(values(&x)[1..], reference[..]);
    let next = x.erase(x.begin());
    assert_eq!(x.get_at(next), Some(&0));
    assert_eq!(values(&x), reference);

    // at end - 1
    x.insert_before(x.end() - 1, -2);
    assert_eq!(x[44], -2);
    assert_eq!(x[45], 44);
    x.erase(x.end() - 2);
    assert_eq!(values(&x), reference);

    // interior, straddling a block boundary
    for index in [19, 20, 21, 39, 40] {
        let at = x.insert_before(x.begin() + index as isize, -3);
        assert_eq!(x.index_of(at), Some(index));
        let mut expected = reference.clone();
        expected.insert(index, -3);
        assert_eq!(values(&x), expected);
        x.erase(at);
        assert_eq!(values(&x), reference);
    }
}

#[test]
fn test_remove_by_index_from_both_halves() {
    let mut x: BlockDeque<i32, 4> = (0..30).collect();
    let mut model: Vec<i32> = (0..30).collect();
    for index in [0, 28, 3, 20, 13, 13, 1] {
        assert_eq!(x.remove(index), Some(model.remove(index)));
        assert_eq!(values(&x), model);
    }
    assert_eq!(x.remove(100), None);
}

#[test]
fn test_resize_cases() {
    // growing an empty deque
    let mut x: BlockDeque<i32, 4> = BlockDeque::new();
    x.resize(9, 7);
    assert_eq!(values(&x), vec![7; 9]);

    // shrinking across block boundaries
    x.resize(2, 0);
    assert_eq!(values(&x), vec![7; 2]);

    // growing past capacity keeps the prefix
    let capacity = x.capacity();
    x.resize(capacity + 5, 1);
    assert_eq!(x.len(), capacity + 5);
    assert_eq!(values(&x)[..2], [7, 7]);
    assert!(x.iter().skip(2).all(|&v| v == 1));
}

#[test]
fn test_resize_to_same_len_touches_nothing() {
    let counter = Rc::new(());
    let mut x: BlockDeque<Rc<()>> = BlockDeque::from_elem(30, counter.clone());
    let before: Vec<*const ()> = x.iter().map(Rc::as_ptr).collect();
    x.resize(30, counter.clone());
    let after: Vec<*const ()> = x.iter().map(Rc::as_ptr).collect();
    assert_eq!(before, after);
    assert_eq!(Rc::strong_count(&counter), 31);
}

#[test]
fn test_clear_is_idempotent() {
    let mut x: BlockDeque<i32> = (0..50).collect();
    let blocks = x.block_count();
    x.clear();
    assert_eq!(x.len(), 0);
    x.clear();
    assert_eq!(x.len(), 0);
    assert_eq!(x.block_count(), blocks);
    x.push_back(1);
    x.push_front(0);
    assert_eq!(values(&x), [0, 1]);
}

#[test]
fn test_truncate_and_shrink_to_fit() {
    let mut x: BlockDeque<i32, 4> = (0..40).collect();
    x.truncate(6);
    x.shrink_to_fit();
    assert_eq!(x.block_count(), 2);
    assert_eq!(values(&x), (0..6).collect::<Vec<_>>());
    x.clear();
    x.shrink_to_fit();
    assert_eq!(x.capacity(), 0);
}

#[test]
fn test_reserve_front_then_push_front() {
    let mut x: BlockDeque<i32, 4> = (0..3).collect();
    x.reserve_front(17);
    let blocks = x.block_count();
    for i in 1..=17 {
        x.push_front(-i);
    }
    assert_eq!(x.block_count(), blocks);
    assert_eq!(values(&x), (-17..3).collect::<Vec<_>>());
}

#[test]
fn test_elements_dropped_exactly_once() {
    let counter = Rc::new(());
    {
        let mut x: BlockDeque<Rc<()>, 3> = BlockDeque::new();
        for _ in 0..20 {
            x.push_back(counter.clone());
            x.push_front(counter.clone());
        }
        x.insert(17, counter.clone());
        drop(x.remove(3));
        x.truncate(25);
        x.resize_with(33, || counter.clone());
        assert_eq!(Rc::strong_count(&counter), 34);
    }
    assert_eq!(Rc::strong_count(&counter), 1);
}
