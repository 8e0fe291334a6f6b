//! Seed data for Hearthshare
//!
//! Everything the app displays that is not typed in by the user comes from
//! these fixed records. There is no fetch interface; "remote" data is
//! compile-time constant.

use crate::types::{Achievement, FeatureSlide, Product, Recipe, StoreLocation, User, UserRecipe};

/// Total likes figure shown on the profile stats row. Placeholder, not a
/// derivation from the feed.
pub const PROFILE_TOTAL_LIKES: u32 = 259;

pub const COMMUNITY_TIP: &str =
    "\"I found authentic Sichuan peppercorns at H Mart! Perfect for mapo tofu.\" - Wei Z.";

/// The user record the app boots with, before onboarding personalizes it.
pub fn seed_user() -> User {
    User {
        name: "Yiming Cheng".to_string(),
        country: "China".to_string(),
        avatar: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=150&h=150&fit=crop"
            .to_string(),
        points: 45,
        recipes_uploaded: 3,
        badges: vec!["First Recipe".to_string(), "Early Adopter".to_string()],
    }
}

/// The fixed initial recipe feed, in display order.
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".to_string(),
            title: "Homemade Dumplings (饺子)".to_string(),
            author: "Wei Zhang".to_string(),
            author_avatar:
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&h=150&fit=crop"
                    .to_string(),
            image: "https://images.unsplash.com/photo-1651399436026-3ca4088b3d6e?w=1080"
                .to_string(),
            cuisine: "Chinese".to_string(),
            ingredients: vec![
                "Ground pork".to_string(),
                "Cabbage".to_string(),
                "Dumpling wrappers".to_string(),
                "Soy sauce".to_string(),
                "Ginger".to_string(),
            ],
            steps: vec![
                "Mix filling".to_string(),
                "Wrap dumplings".to_string(),
                "Boil or pan-fry".to_string(),
                "Serve with dipping sauce".to_string(),
            ],
            likes: 245,
            comments: 32,
            timestamp: "2 hours ago".to_string(),
            is_liked: false,
        },
        Recipe {
            id: "2".to_string(),
            title: "Butter Chicken (मक्खन मुर्ग)".to_string(),
            author: "Priya Sharma".to_string(),
            author_avatar:
                "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop"
                    .to_string(),
            image: "https://images.unsplash.com/photo-1690915475414-9aaecfd3ba74?w=1080"
                .to_string(),
            cuisine: "Indian".to_string(),
            ingredients: vec![
                "Chicken".to_string(),
                "Butter".to_string(),
                "Cream".to_string(),
                "Tomatoes".to_string(),
                "Garam masala".to_string(),
            ],
            steps: vec![
                "Marinate chicken".to_string(),
                "Cook in butter".to_string(),
                "Add cream sauce".to_string(),
                "Simmer until done".to_string(),
            ],
            likes: 189,
            comments: 24,
            timestamp: "5 hours ago".to_string(),
            is_liked: true,
        },
        Recipe {
            id: "3".to_string(),
            title: "Street Tacos".to_string(),
            author: "Carlos Rodriguez".to_string(),
            author_avatar:
                "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150&h=150&fit=crop"
                    .to_string(),
            image: "https://images.unsplash.com/photo-1688845465690-e5ea24774fd5?w=1080"
                .to_string(),
            cuisine: "Mexican".to_string(),
            ingredients: vec![
                "Corn tortillas".to_string(),
                "Beef".to_string(),
                "Cilantro".to_string(),
                "Onion".to_string(),
                "Lime".to_string(),
            ],
            steps: vec![
                "Season and cook meat".to_string(),
                "Warm tortillas".to_string(),
                "Assemble tacos".to_string(),
                "Top with cilantro and onion".to_string(),
            ],
            likes: 312,
            comments: 41,
            timestamp: "1 day ago".to_string(),
            is_liked: false,
        },
        Recipe {
            id: "4".to_string(),
            title: "Carbonara Pasta".to_string(),
            author: "Marco Bianchi".to_string(),
            author_avatar:
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop"
                    .to_string(),
            image: "https://images.unsplash.com/photo-1739417083034-4e9118f487be?w=1080"
                .to_string(),
            cuisine: "Italian".to_string(),
            ingredients: vec![
                "Spaghetti".to_string(),
                "Eggs".to_string(),
                "Pancetta".to_string(),
                "Pecorino cheese".to_string(),
                "Black pepper".to_string(),
            ],
            steps: vec![
                "Cook pasta".to_string(),
                "Fry pancetta".to_string(),
                "Mix eggs and cheese".to_string(),
                "Combine with pasta".to_string(),
            ],
            likes: 267,
            comments: 35,
            timestamp: "1 day ago".to_string(),
            is_liked: true,
        },
    ]
}

pub fn feature_slides() -> [FeatureSlide; 3] {
    [
        FeatureSlide {
            title: "Share Your Recipes",
            description: "Upload photos and share your favorite dishes from home",
        },
        FeatureSlide {
            title: "Earn Rewards",
            description: "Get points for every recipe and redeem them for prizes",
        },
        FeatureSlide {
            title: "Connect with Others",
            description: "Meet international students who love cooking",
        },
    ]
}

pub fn nearby_stores() -> Vec<StoreLocation> {
    vec![
        StoreLocation {
            name: "Trader Joe's".to_string(),
            distance: "0.8 mi".to_string(),
            address: "123 Main St, Chicago, IL".to_string(),
        },
        StoreLocation {
            name: "H Mart".to_string(),
            distance: "1.2 mi".to_string(),
            address: "456 Oak Ave, Chicago, IL".to_string(),
        },
        StoreLocation {
            name: "Whole Foods".to_string(),
            distance: "1.5 mi".to_string(),
            address: "789 Elm St, Chicago, IL".to_string(),
        },
    ]
}

pub fn recommended_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Asian Spice Variety Pack".to_string(),
            store: "Amazon".to_string(),
            price: "$12.99".to_string(),
            discount: Some("20% OFF".to_string()),
            image: "https://images.unsplash.com/photo-1730595442402-0feffe7833c3?w=1080"
                .to_string(),
            category: "Spices".to_string(),
            link: "#".to_string(),
        },
        Product {
            id: "2".to_string(),
            name: "Fresh Produce Bundle".to_string(),
            store: "Trader Joe's".to_string(),
            price: "$8.99".to_string(),
            discount: None,
            image: "https://images.unsplash.com/photo-1748342319942-223b99937d4e?w=1080"
                .to_string(),
            category: "Vegetables".to_string(),
            link: "#".to_string(),
        },
        Product {
            id: "3".to_string(),
            name: "Authentic Asian Sauces Set".to_string(),
            store: "Amazon".to_string(),
            price: "$15.99".to_string(),
            discount: Some("15% OFF".to_string()),
            image: "https://images.unsplash.com/photo-1760104051489-a8030f560159?w=1080"
                .to_string(),
            category: "Sauces".to_string(),
            link: "#".to_string(),
        },
    ]
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            title: "First Recipe".to_string(),
            description: "Uploaded your first recipe".to_string(),
            earned: true,
            progress: None,
        },
        Achievement {
            title: "Early Adopter".to_string(),
            description: "Joined the community early".to_string(),
            earned: true,
            progress: None,
        },
        Achievement {
            title: "Popular Chef".to_string(),
            description: "Get 100 total likes".to_string(),
            earned: false,
            progress: Some(75),
        },
        Achievement {
            title: "Recipe Master".to_string(),
            description: "Upload 10 recipes".to_string(),
            earned: false,
            progress: Some(30),
        },
    ]
}

pub fn user_recipes() -> Vec<UserRecipe> {
    vec![
        UserRecipe {
            id: "1".to_string(),
            title: "Kung Pao Chicken".to_string(),
            image: "https://images.unsplash.com/photo-1651399436026-3ca4088b3d6e?w=400"
                .to_string(),
            likes: 89,
            points: 15,
        },
        UserRecipe {
            id: "2".to_string(),
            title: "Mapo Tofu".to_string(),
            image: "https://images.unsplash.com/photo-1690915475414-9aaecfd3ba74?w=400"
                .to_string(),
            likes: 67,
            points: 15,
        },
        UserRecipe {
            id: "3".to_string(),
            title: "Scallion Pancakes".to_string(),
            image: "https://images.unsplash.com/photo-1688845465690-e5ea24774fd5?w=400"
                .to_string(),
            likes: 103,
            points: 15,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_user_defaults() {
        let user = seed_user();
        assert_eq!(user.name, "Yiming Cheng");
        assert_eq!(user.country, "China");
        assert_eq!(user.points, 45);
        assert_eq!(user.recipes_uploaded, 3);
        assert_eq!(user.badges, vec!["First Recipe", "Early Adopter"]);
    }

    #[test]
    fn test_seed_feed_has_four_recipes_in_order() {
        let recipes = seed_recipes();
        assert_eq!(recipes.len(), 4);

        let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_first_seed_recipe_values() {
        let recipes = seed_recipes();
        let dumplings = &recipes[0];

        assert_eq!(dumplings.likes, 245);
        assert_eq!(dumplings.comments, 32);
        assert!(!dumplings.is_liked);
        assert_eq!(dumplings.ingredients.len(), 5);
        assert_eq!(dumplings.steps.len(), 4);
    }

    #[test]
    fn test_seed_likes_flags() {
        let recipes = seed_recipes();
        let liked: Vec<bool> = recipes.iter().map(|r| r.is_liked).collect();
        assert_eq!(liked, vec![false, true, false, true]);
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(feature_slides().len(), 3);
        assert_eq!(nearby_stores().len(), 3);
        assert_eq!(recommended_products().len(), 3);
        assert_eq!(achievements().len(), 4);
        assert_eq!(user_recipes().len(), 3);
    }

    #[test]
    fn test_earned_achievements_have_no_progress() {
        for achievement in achievements() {
            if achievement.earned {
                assert!(achievement.progress.is_none());
            } else {
                assert!(achievement.progress.is_some());
            }
        }
    }

    #[test]
    fn test_product_links_are_placeholders() {
        for product in recommended_products() {
            assert_eq!(product.link, "#");
        }
    }
}
