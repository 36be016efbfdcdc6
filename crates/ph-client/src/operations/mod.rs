/// Listing the posts on Product Hunt's default page
pub mod posts;
