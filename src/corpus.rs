//! Static review corpus standing in for a live scraper.
//!
//! The source is modeled behind a trait so a real fetcher can replace the
//! sample corpus without touching the downstream pipeline stages.

/// Product name stamped onto every corpus entry.
pub const PRODUCT_NAME: &str = "Sample Electronics Product";

/// A raw review as delivered by the source, before cleaning.
#[derive(Debug, Clone)]
pub struct RawReview {
    pub text: String,
    pub rating: u8,
}

/// Supplies the ordered batch of raw reviews for a product.
pub trait ReviewSource: Send + Sync {
    /// Fetches reviews for the given product identifier. An empty result
    /// means "no content found".
    fn fetch(&self, product_url: &str) -> Vec<RawReview>;

    /// The product name stamped onto assembled records.
    fn product_name(&self) -> &str;
}

// Hand-authored sample reviews spanning ratings 1-5, returned for every
// request regardless of the product identifier.
static SAMPLE_REVIEWS: &[(&str, u8)] = &[
    ("Excellent product! Really satisfied with the quality and fast delivery. Highly recommended!", 5),
    ("Good value for money. Product works as expected and arrived on time.", 4),
    ("Average product. Could be better for the price but it's okay.", 3),
    ("Not satisfied with the quality. Product broke after few days of use.", 2),
    ("Outstanding quality and amazing customer service! Will buy again.", 5),
    ("Fast shipping and good packaging. Product meets expectations.", 4),
    ("Product is okay but delivery was delayed by several days.", 3),
    ("Poor quality material. Not worth the money spent on it.", 2),
    ("Amazing product! Exceeded my expectations in every way.", 5),
    ("Good product overall. Minor issues with packaging but content is fine.", 4),
    ("Decent product for the price range. Nothing special though.", 3),
    ("Product quality is below average. Very disappointed with purchase.", 2),
    ("Fantastic product! Perfect quality and excellent service.", 5),
    ("Good quality and reasonable price. Satisfied with the purchase.", 4),
    ("Product is fine but nothing extraordinary. Average experience.", 3),
    ("Not happy with the purchase. Multiple quality issues found.", 2),
    ("Superb quality and excellent customer service! Highly recommended.", 5),
    ("Good product with minor flaws. Overall satisfied.", 4),
    ("Average quality product. Meets basic requirements only.", 3),
    ("Poor customer service and below average product quality.", 1),
    ("Brilliant product! Love the design and functionality.", 5),
    ("Good value and quick delivery. Happy with the purchase.", 4),
    ("Product meets expectations. Standard quality for the price.", 3),
    ("Quality could be significantly improved. Not impressed.", 2),
    ("Excellent product with great features! Worth every penny.", 5),
    ("Satisfied with the purchase. Good quality for money.", 4),
    ("Okay product for the price. Nothing to complain about.", 3),
    ("Not impressed with the overall quality. Expected better.", 2),
    ("Outstanding quality and service! Perfect shopping experience.", 5),
    ("Good product overall. Minor issues but acceptable.", 4),
    ("Average experience. Product is standard quality.", 3),
    ("Below expectations. Quality issues are concerning.", 2),
    ("Perfect product! Exactly what I was looking for.", 5),
    ("Good quality for the price. Reasonable purchase.", 4),
    ("Standard product. Nothing exceptional but works fine.", 3),
    ("Quality issues noticed immediately. Not satisfied.", 2),
    ("Excellent purchase decision! Product is amazing.", 5),
    ("Happy with the product. Good build quality.", 4),
    ("Meets basic requirements. Average product overall.", 3),
    ("Disappointed with quality. Multiple defects found.", 2),
    ("Amazing product quality! Exceptional value for money.", 5),
    ("Good overall experience. Product works well.", 4),
    ("Acceptable product. Standard quality and features.", 3),
    ("Poor build quality. Product feels cheap.", 2),
    ("Fantastic value for money! Excellent product.", 5),
    ("Decent product quality. Satisfied with purchase.", 4),
    ("Nothing extraordinary. Basic product functionality.", 3),
    ("Quality concerns. Product doesn't meet standards.", 2),
    ("Highly satisfied with purchase! Great product.", 5),
    ("Good product with minor issues. Overall positive.", 4),
];

/// The fixed sample corpus. The product identifier is accepted but does not
/// influence which reviews come back.
pub struct SampleCorpus;

impl ReviewSource for SampleCorpus {
    fn fetch(&self, _product_url: &str) -> Vec<RawReview> {
        let reviews: Vec<RawReview> = SAMPLE_REVIEWS
            .iter()
            .map(|&(text, rating)| RawReview {
                text: text.to_string(),
                rating,
            })
            .collect();
        tracing::info!("Generated {} sample reviews", reviews.len());
        reviews
    }

    fn product_name(&self) -> &str {
        PRODUCT_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_has_fifty_entries() {
        let reviews = SampleCorpus.fetch("https://example.com/product/1");
        assert_eq!(reviews.len(), 50);
    }

    #[test]
    fn test_ratings_are_within_range() {
        for review in SampleCorpus.fetch("https://example.com/x") {
            assert!((1..=5).contains(&review.rating));
            assert!(!review.text.is_empty());
        }
    }

    #[test]
    fn test_identifier_does_not_affect_content() {
        let a = SampleCorpus.fetch("https://example.com/a");
        let b = SampleCorpus.fetch("https://shop.test/b");
        assert_eq!(a.len(), b.len());
        assert_eq!(a[0].text, b[0].text);
        assert_eq!(a[49].text, b[49].text);
    }

    #[test]
    fn test_order_is_stable() {
        let reviews = SampleCorpus.fetch("ignored");
        assert!(reviews[0].text.starts_with("Excellent product!"));
        assert_eq!(reviews[0].rating, 5);
        assert_eq!(reviews[1].rating, 4);
    }
}
