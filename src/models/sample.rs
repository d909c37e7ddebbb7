use chrono::{Days, NaiveDate, Utc};

use super::itinerary::{Activity, ItineraryDay, MealRecommendation, Meals, Transportation};

/// A fully populated two-day itinerary for frontend development and demos.
/// Unlike generated days, these carry meal and transport recommendations,
/// so rendering every record shape can be exercised without an upstream
/// call. Dates are relative to today so the data always looks current.
pub fn sample_itinerary() -> Vec<ItineraryDay> {
    let tomorrow = Utc::now().date_naive() + Days::new(1);
    vec![first_day(tomorrow), second_day(tomorrow + Days::new(1))]
}

fn first_day(date: NaiveDate) -> ItineraryDay {
    ItineraryDay {
        date,
        activities: vec![
            Activity {
                title: "Eiffel Tower Visit".to_string(),
                time: "09:00 AM".to_string(),
                duration: "2 hours".to_string(),
                price_range: "€25-50".to_string(),
                description: "Start your Parisian adventure with a visit to the iconic \
                              Eiffel Tower and its observation decks."
                    .to_string(),
                location: "Champ de Mars, 5 Av. Anatole France, 75007 Paris, France".to_string(),
                notes: Some("Book tickets in advance to avoid long queues.".to_string()),
                booking_url: Some("https://www.toureiffel.paris/en/rates-times-tickets".to_string()),
            },
            Activity {
                title: "Louvre Museum Tour".to_string(),
                time: "12:30 PM".to_string(),
                duration: "3 hours".to_string(),
                price_range: "€17-25".to_string(),
                description: "Explore one of the world's largest museums, home to the \
                              Mona Lisa and the Venus de Milo."
                    .to_string(),
                location: "Rue de Rivoli, 75001 Paris, France".to_string(),
                notes: Some("The museum is closed on Tuesdays.".to_string()),
                booking_url: Some("https://www.louvre.fr/en/online-tickets".to_string()),
            },
            Activity {
                title: "Seine River Cruise".to_string(),
                time: "04:30 PM".to_string(),
                duration: "1 hour".to_string(),
                price_range: "€15-30".to_string(),
                description: "A scenic boat cruise along the Seine, passing Notre-Dame \
                              and the Musée d'Orsay."
                    .to_string(),
                location: "Port de la Bourdonnais, 75007 Paris, France".to_string(),
                notes: Some("Sunset cruises are particularly beautiful.".to_string()),
                booking_url: Some("https://www.bateauxparisiens.com/en/cruise-tours.html".to_string()),
            },
        ],
        meals: Meals {
            breakfast: Some(MealRecommendation {
                name: "Café de Flore".to_string(),
                cuisine: "French".to_string(),
                price_range: "€€".to_string(),
                description: "Iconic Parisian café known for its traditional French \
                              breakfast and historic ambiance."
                    .to_string(),
                location: "172 Bd Saint-Germain, 75006 Paris, France".to_string(),
                booking_url: Some("https://cafe-de-flore.com".to_string()),
            }),
            lunch: Some(MealRecommendation {
                name: "Le Fumoir".to_string(),
                cuisine: "French Bistro".to_string(),
                price_range: "€€".to_string(),
                description: "Chic bistro near the Louvre, perfect for a classic French \
                              lunch after the museum."
                    .to_string(),
                location: "6 Rue de l'Amiral de Coligny, 75001 Paris, France".to_string(),
                booking_url: Some("https://www.lefumoir.com".to_string()),
            }),
            dinner: Some(MealRecommendation {
                name: "Les Ombres".to_string(),
                cuisine: "French Gourmet".to_string(),
                price_range: "€€€".to_string(),
                description: "Elegant restaurant with Eiffel Tower views, serving modern \
                              French cuisine."
                    .to_string(),
                location: "27 Quai Branly, 75007 Paris, France".to_string(),
                booking_url: Some("https://www.lesombres-restaurant.com".to_string()),
            }),
        },
        transportations: vec![
            Transportation {
                from: "Café de Flore".to_string(),
                to: "Eiffel Tower".to_string(),
                method: "Taxi".to_string(),
                duration: "15 min".to_string(),
                notes: Some("Metro line 8 to École Militaire also works (20 min).".to_string()),
                cost: Some("€15-20".to_string()),
            },
            Transportation {
                from: "Louvre Museum".to_string(),
                to: "Seine River Cruise".to_string(),
                method: "Walking".to_string(),
                duration: "25 min".to_string(),
                notes: Some("A pleasant walk along the Seine riverbank.".to_string()),
                cost: None,
            },
        ],
    }
}

fn second_day(date: NaiveDate) -> ItineraryDay {
    ItineraryDay {
        date,
        activities: vec![
            Activity {
                title: "Montmartre Walking Tour".to_string(),
                time: "10:00 AM".to_string(),
                duration: "2.5 hours".to_string(),
                price_range: "Free (tips appreciated)".to_string(),
                description: "Explore the artistic Montmartre neighborhood and its \
                              picturesque streets."
                    .to_string(),
                location: "Meet at Anvers Metro Station, 75018 Paris, France".to_string(),
                notes: Some("Wear comfortable shoes; there are steep hills.".to_string()),
                booking_url: Some("https://www.montmartrefootsteps.com/".to_string()),
            },
            Activity {
                title: "Sacré-Cœur Basilica Visit".to_string(),
                time: "01:00 PM".to_string(),
                duration: "1 hour".to_string(),
                price_range: "Free (Dome: €6)".to_string(),
                description: "Visit the white-domed basilica with panoramic views from \
                              the highest point of Paris."
                    .to_string(),
                location: "35 Rue du Chevalier de la Barre, 75018 Paris, France".to_string(),
                notes: Some("Dress modestly; the dome climb has 300 steps.".to_string()),
                booking_url: None,
            },
        ],
        meals: Meals {
            breakfast: Some(MealRecommendation {
                name: "Hardware Société".to_string(),
                cuisine: "International Brunch".to_string(),
                price_range: "€€".to_string(),
                description: "Popular Australian-style brunch spot with excellent coffee."
                    .to_string(),
                location: "10 Rue Lamarck, 75018 Paris, France".to_string(),
                booking_url: None,
            }),
            lunch: Some(MealRecommendation {
                name: "Le Consulat".to_string(),
                cuisine: "French Bistro".to_string(),
                price_range: "€€".to_string(),
                description: "Historic bistro in the heart of Montmartre, once frequented \
                              by Picasso and Van Gogh."
                    .to_string(),
                location: "18 Rue Norvins, 75018 Paris, France".to_string(),
                booking_url: None,
            }),
            dinner: None,
        },
        transportations: vec![Transportation {
            from: "Hardware Société".to_string(),
            to: "Montmartre Meeting Point".to_string(),
            method: "Walking".to_string(),
            duration: "5 min".to_string(),
            notes: Some("Short walk to the meeting point at Anvers Metro Station.".to_string()),
            cost: None,
        }],
    }
}
