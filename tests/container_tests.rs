//! Container rule tests.
//!
//! These tests exercise the insertion rules shared by every leaf
//! container:
//! - Allow-sets follow the component kind hierarchy
//! - Capacity bounds hold no matter how many insertions are attempted
//! - Card-only containers reject everything that isn't a card
//! - Deck draw/peek keep drawn cards out of the remainder

use proptest::prelude::*;

use rust_tabletop::components::{Component, ComponentKind};
use rust_tabletop::containers::{
    AnyContainer, CardContainer, ChildMut, Container, ContainerContainer, ContainerKind, Deck,
    DeckOptions, Hand, LoggingContainer, TokenContainer, Workspace,
};
use rust_tabletop::core::{Error, GameRng};

fn component_of(kind: ComponentKind) -> Component {
    match kind {
        ComponentKind::Component => Component::new(),
        ComponentKind::Card => Component::card(),
        ComponentKind::StandardPlayingCard => Component::playing_card("7", "Clubs"),
        ComponentKind::TwoSidedCard => {
            Component::two_sided(Component::card(), Component::card()).unwrap()
        }
        ComponentKind::Piece => Component::piece(),
    }
}

const ALL_KINDS: [ComponentKind; 5] = [
    ComponentKind::Component,
    ComponentKind::Card,
    ComponentKind::TwoSidedCard,
    ComponentKind::StandardPlayingCard,
    ComponentKind::Piece,
];

fn any_kind() -> impl Strategy<Value = ComponentKind> {
    prop::sample::select(ALL_KINDS.to_vec())
}

fn numbered_deck(n: usize) -> Deck {
    let cards = (0..n)
        .map(|i| Component::playing_card(i.to_string(), "Spades"))
        .collect();
    Deck::from_cards(cards).unwrap()
}

// =============================================================================
// Leaf containers
// =============================================================================

/// Test that card-only containers reject pieces.
#[test]
fn test_card_only_containers_reject_pieces() {
    let mut cards = CardContainer::new();
    let mut hand = Hand::new();
    let mut deck = Deck::new();

    for result in [
        cards.add(Component::piece()),
        hand.add(Component::piece()),
        deck.add(Component::piece()),
    ] {
        assert_eq!(result, Err(Error::NotACard { kind: ComponentKind::Piece }));
    }
    assert!(cards.is_empty() && hand.is_empty() && deck.is_empty());
}

/// Test that a deck keeps its kind and card-only rule however it is reached.
#[test]
fn test_deck_stays_a_deck_through_every_mutable_route() {
    let mut deck = Deck::new().with_name("draw");
    let deck_id = deck.id();
    let piece = Error::NotACard { kind: ComponentKind::Piece };

    assert_eq!(deck.as_container_mut().add(Component::piece()), Err(piece.clone()));
    deck.as_container_mut().clear();
    assert_eq!(AnyContainer::from(Deck::new()).kind(), ContainerKind::Deck);

    let mut table = ContainerContainer::new()
        .allow(ContainerKind::Deck)
        .with_cap(ContainerKind::Deck, Some(1));
    table.add(deck).unwrap();

    let mut found = table.find_container_mut(deck_id).unwrap();
    assert_eq!(found.add(Component::piece()), Err(piece.clone()));
    found.add(Component::card()).unwrap();

    let mut child = table.child_mut("draw").and_then(ChildMut::into_container).unwrap();
    assert_eq!(child.insert(0, Component::piece()), Err(piece));

    assert_eq!(table.list()[0].kind(), ContainerKind::Deck);
    assert_eq!(table.count_of(ContainerKind::Deck), 1);

    // Taken out and put back, it still counts as a deck
    let deck = table.remove(deck_id).unwrap();
    assert_eq!(deck.kind(), ContainerKind::Deck);
    table.add(deck).unwrap();
    assert_eq!(
        table.add(Deck::new()),
        Err(Error::kind_capacity(ContainerKind::Deck, 1))
    );
}

/// Test recovering a card a full hand refused.
#[test]
fn test_rejected_component_is_handed_back() {
    let mut hand = Hand::new().with_max_capacity(1);
    hand.add(Component::card()).unwrap();

    let card = Component::playing_card("Q", "Diamonds");
    let id = card.id();
    let rejected = hand.try_add(card).unwrap_err();
    assert_eq!(rejected.error, Error::capacity(1));

    let mut discard = CardContainer::new();
    discard.add(rejected.into_value()).unwrap();
    assert!(discard.contains(id));
    assert_eq!(hand.len(), 1);
}

/// Test that the card-only rule is checked before capacity.
#[test]
fn test_card_only_check_precedes_capacity() {
    let mut hand = Hand::new().with_max_capacity(0);
    assert_eq!(
        hand.add(Component::new()),
        Err(Error::NotACard { kind: ComponentKind::Component })
    );
    assert_eq!(hand.add(Component::card()), Err(Error::capacity(0)));
}

/// Test that token and logging containers accept every kind.
#[test]
fn test_token_and_logging_containers_accept_anything() {
    let mut tokens = TokenContainer::new();
    let mut log = LoggingContainer::new().with_name("discard");

    for kind in ALL_KINDS {
        tokens.add(component_of(kind)).unwrap();
        log.add(component_of(kind)).unwrap();
    }
    assert_eq!(tokens.len(), ALL_KINDS.len());
    assert_eq!(log.len(), ALL_KINDS.len());
    assert_eq!(log.kind(), ContainerKind::Logging);
}

/// Test sorting a hand by card description.
#[test]
fn test_hand_organize_by_value() {
    let mut hand = Hand::new();
    for value in ["9", "2", "5"] {
        hand.add(Component::playing_card(value, "Hearts")).unwrap();
    }

    hand.organize(|a, b| a.info().cmp(&b.info()));

    let infos: Vec<_> = hand.iter().map(Component::info).collect();
    assert_eq!(infos, vec!["2 of Hearts", "5 of Hearts", "9 of Hearts"]);
}

// =============================================================================
// Decks
// =============================================================================

/// Test drawing from the top of a deck.
#[test]
fn test_draw_takes_from_top() {
    let mut deck = numbered_deck(5);
    let drawn: Vec<_> = deck.draw(2).unwrap().iter().map(Component::info).collect();
    assert_eq!(drawn, vec!["0 of Spades", "1 of Spades"]);
    assert_eq!(deck.size(), 3);
    assert_eq!(deck.peek(1).unwrap()[0].info(), "2 of Spades");
}

/// Test that overdrawing fails and leaves the deck unchanged.
#[test]
fn test_draw_too_many_leaves_deck_alone() {
    let mut deck = numbered_deck(3);
    assert_eq!(
        deck.draw(4).unwrap_err(),
        Error::InsufficientCards { requested: 4, available: 3 }
    );
    assert_eq!(deck.size(), 3);
    assert_eq!(
        deck.peek(5).unwrap_err(),
        Error::InsufficientCards { requested: 5, available: 3 }
    );
}

/// Test that equal seeds shuffle equal decks identically.
#[test]
fn test_seeded_shuffle_is_reproducible() {
    let cards = |tag: &str| -> Vec<Component> {
        (0..20)
            .map(|i| Component::playing_card(i.to_string(), tag))
            .collect()
    };

    let mut rng1 = GameRng::new(7);
    let mut rng2 = GameRng::new(7);
    let deck1 = Deck::with_options(cards("Hearts"), DeckOptions::default().shuffled(), &mut rng1)
        .unwrap();
    let deck2 = Deck::with_options(cards("Hearts"), DeckOptions::default().shuffled(), &mut rng2)
        .unwrap();

    let order = |deck: &Deck| deck.iter().map(Component::info).collect::<Vec<_>>();
    assert_eq!(order(&deck1), order(&deck2));
    assert_eq!(deck1.size(), 20);
}

/// Test rebuilding a deck from fresh cards.
#[test]
fn test_rebuild_and_shuffle_replaces_contents() {
    let mut deck = numbered_deck(4);
    let mut rng = GameRng::new(1);
    let fresh: Vec<_> = (0..6).map(|_| Component::card()).collect();

    deck.rebuild_and_shuffle(fresh, &mut rng).unwrap();
    assert_eq!(deck.size(), 6);
    assert!(deck.iter().all(|c| c.kind() == ComponentKind::Card));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Test allow-sets against every pair of component kinds.
    #[test]
    fn prop_allow_set_rejects_outsiders(allowed in any_kind(), inserted in any_kind()) {
        let mut container = Container::new().allow(allowed);
        let result = container.add(component_of(inserted));

        if inserted.is_a(allowed) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(container.len(), 1);
        } else {
            prop_assert_eq!(result, Err(Error::TypeNotAllowed { kind: inserted }));
            prop_assert_eq!(container.len(), 0);
        }
    }

    /// Test that capacity holds for any number of insertions.
    #[test]
    fn prop_capacity_never_exceeded(capacity in 0usize..10, attempts in 0usize..20) {
        let mut container = Container::new().with_max_capacity(capacity);
        for i in 0..attempts {
            let result = container.add(Component::card());
            if i < capacity {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(Error::capacity(capacity)));
            }
            prop_assert!(container.len() <= capacity);
        }
        prop_assert_eq!(container.len(), attempts.min(capacity));
    }

    /// Test that drawn cards are no longer in the deck.
    #[test]
    fn prop_drawn_cards_leave_the_deck(size in 0usize..30, n in 0usize..40) {
        let mut deck = numbered_deck(size);
        let before: Vec<_> = deck.iter().map(Component::id).collect();

        match deck.draw(n) {
            Ok(drawn) => {
                prop_assert!(n <= size);
                let drawn_ids: Vec<_> = drawn.iter().map(Component::id).collect();
                prop_assert_eq!(&drawn_ids[..], &before[..n]);

                let rest = deck.peek(deck.size()).unwrap();
                prop_assert!(rest.iter().all(|c| !drawn_ids.contains(&c.id())));
            }
            Err(err) => {
                prop_assert!(n > size);
                prop_assert_eq!(err, Error::InsufficientCards { requested: n, available: size });
                prop_assert_eq!(deck.size(), size);
            }
        }
    }
}
