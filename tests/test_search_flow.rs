use mealdb_search::render::{self, HINT_COLLAPSE, HINT_EXPAND, NO_RESULTS};
use mealdb_search::{App, MealDb, SearchOutcome, ViewPhase};
use mockito::{Matcher, Server, ServerGuard};

fn meals_body(meals: &[&str]) -> String {
    format!(r#"{{"meals": [{}]}}"#, meals.join(","))
}

fn arrabiata_meal() -> &'static str {
    r#"{
        "idMeal": "52771",
        "strMeal": "Spaghetti Arrabiata",
        "strCategory": "Pasta",
        "strArea": "Italian",
        "strMealThumb": "https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg",
        "strInstructions": "Bring a large pot of water to a boil. Add kosher salt to the boiling water, then add the pasta.",
        "strTags": "Pasta,Curry",
        "strIngredient1": "penne rigate",
        "strMeasure1": "1 pound",
        "strIngredient2": "olive oil",
        "strMeasure2": "1/4 cup",
        "strIngredient3": "garlic",
        "strMeasure3": "3 cloves",
        "strIngredient4": "chopped tomatoes",
        "strMeasure4": "1 tin",
        "strIngredient5": "red chile flakes",
        "strMeasure5": "1/2 teaspoon",
        "strIngredient6": "italian seasoning",
        "strMeasure6": "1/2 teaspoon",
        "strIngredient7": "basil",
        "strMeasure7": "6 leaves",
        "strIngredient8": "Parmigiano-Reggiano",
        "strMeasure8": "spinkling",
        "strIngredient9": "",
        "strMeasure9": "",
        "strIngredient10": null,
        "strMeasure10": null
    }"#
}

fn app_against(server: &ServerGuard) -> App {
    App::new(Box::new(MealDb::with_base_url(server.url())))
}

#[tokio::test]
async fn test_one_card_per_returned_meal() {
    let mut server = Server::new_async().await;
    let body = meals_body(&[
        r#"{"idMeal": "1", "strMeal": "Beef Stew", "strCategory": "Beef"}"#,
        r#"{"idMeal": "2", "strMeal": "Beef Wellington", "strCategory": "Beef"}"#,
        r#"{"idMeal": "3", "strMeal": "Beef Banh Mi", "strCategory": "Beef"}"#,
    ]);
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "beef".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create();

    let mut app = app_against(&server);
    app.submit("beef").await;

    match &app.view.phase {
        ViewPhase::Results(set) => {
            assert_eq!(set.len(), 3);
            let ids: Vec<_> = set.cards.iter().map(|c| c.meal.id.as_str()).collect();
            assert_eq!(ids, vec!["1", "2", "3"]);
        }
        other => panic!("expected results, got {other:?}"),
    }

    let out = render::render(&app.view);
    assert!(out.contains("1. Beef Stew (Beef)"));
    assert!(out.contains("2. Beef Wellington (Beef)"));
    assert!(out.contains("3. Beef Banh Mi (Beef)"));
}

#[tokio::test]
async fn test_null_meals_renders_empty_state() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals": null}"#)
        .create();

    let mut app = app_against(&server);
    app.submit("qqqqqq").await;

    assert!(matches!(app.view.phase, ViewPhase::Empty));
    assert!(app.view.error.is_none());
    assert_eq!(render::render(&app.view), format!("{NO_RESULTS}\n"));
}

#[tokio::test]
async fn test_transport_failure_clears_results_and_shows_generic_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(503)
        .create();

    let mut app = app_against(&server);
    app.submit("beef").await;

    assert!(matches!(app.view.phase, ViewPhase::Error));
    let out = render::render(&app.view);
    assert!(out.contains("Error loading recipes. Please check your internet connection."));
    assert!(!out.contains("1."));
}

#[tokio::test]
async fn test_malformed_body_shows_generic_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>not the api you were looking for</html>")
        .create();

    let mut app = app_against(&server);
    app.submit("beef").await;

    assert!(matches!(app.view.phase, ViewPhase::Error));
    assert!(render::render(&app.view).contains("Error loading recipes."));
}

#[tokio::test]
async fn test_whitespace_query_makes_zero_network_calls() {
    let mut server = Server::new_async().await;
    let mock = server.mock("GET", Matcher::Any).expect(0).create();

    let mut app = app_against(&server);
    app.submit("   ").await;
    app.submit("").await;

    assert_eq!(app.view.error, Some("Please enter a search term"));
    mock.assert();
}

#[tokio::test]
async fn test_error_is_cleared_by_next_successful_search() {
    let mut server = Server::new_async().await;
    let _fail = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "bad".into()))
        .with_status(500)
        .create();
    let _ok = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "good".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(meals_body(&[
            r#"{"idMeal": "1", "strMeal": "Good Soup", "strCategory": "Soup"}"#,
        ]))
        .create();

    let mut app = app_against(&server);

    app.submit("bad").await;
    assert!(app.view.error.is_some());

    app.submit("good").await;
    assert!(app.view.error.is_none());
    assert!(render::render(&app.view).contains("Good Soup"));
}

#[tokio::test]
async fn test_arrabiata_scenario() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "Arrabiata".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(meals_body(&[arrabiata_meal()]))
        .create();

    let mut app = app_against(&server);
    app.submit("Arrabiata").await;

    // Exactly one card, collapsed
    match &app.view.phase {
        ViewPhase::Results(set) => assert_eq!(set.len(), 1),
        other => panic!("expected results, got {other:?}"),
    }
    let collapsed = render::render(&app.view);
    assert!(collapsed.contains("1. Spaghetti Arrabiata (Pasta)"));
    assert!(collapsed.contains(HINT_EXPAND));
    assert!(!collapsed.contains("Ingredients:"));

    // Selecting the card shows the 8 populated ingredient slots and swaps
    // the hint to the collapse phrasing
    assert_eq!(app.toggle("1"), Some(true));
    let expanded = render::render(&app.view);
    assert!(expanded.contains(HINT_COLLAPSE));
    assert_eq!(expanded.matches("\n     - ").count(), 8);
    assert!(expanded.contains("- 1 pound penne rigate"));
    assert!(expanded.contains("- spinkling Parmigiano-Reggiano"));
    assert!(expanded.contains("Bring a large pot of water to a boil."));

    // A second selection restores the collapsed state
    assert_eq!(app.toggle("1"), Some(false));
    let restored = render::render(&app.view);
    assert!(restored.contains(HINT_EXPAND));
    assert!(!restored.contains("Ingredients:"));
}

#[tokio::test]
async fn test_search_meals_with_client_entry_point() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "Arrabiata".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(meals_body(&[arrabiata_meal()]))
        .create();

    let api = MealDb::with_base_url(server.url());
    let outcome = mealdb_search::search_meals_with_client(&api, "Arrabiata")
        .await
        .unwrap();

    match outcome {
        SearchOutcome::Found(meals) => {
            assert_eq!(meals.len(), 1);
            assert_eq!(meals[0].ingredients().len(), 8);
        }
        SearchOutcome::NoMatches => panic!("expected a match"),
    }
}
