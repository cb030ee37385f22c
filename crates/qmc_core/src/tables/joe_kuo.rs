//! Embedded Sobol' direction numbers.
//!
//! The table lists every primitive polynomial over GF(2) up to degree 13,
//! ordered by degree and then by coefficient word, which is the polynomial
//! order of the new-joe-kuo-6 parameter set (S. Joe and F. Y. Kuo,
//! "Constructing Sobol sequences with better two-dimensional projections",
//! SIAM J. Sci. Comput. 30, 2008). The first dimension is the van der
//! Corput sequence and carries no entry.
//!
//! Dimensions 2 to 32 use the Joe–Kuo initial direction numbers. For the
//! remaining dimensions the initial numbers were picked from sixteen
//! SplitMix64-drawn odd candidates per dimension, keeping the candidate
//! whose two-dimensional projections with all earlier dimensions have the
//! smallest worst-case, then total, t-value over the first 1024 points.

/// Number of direction numbers (matrix columns) per dimension.
pub const SOBOL_COLUMNS: usize = 32;

/// Bit precision of the embedded direction numbers.
pub const SOBOL_PRECISION: u32 = 32;

/// `(degree s, polynomial coefficients a, initial m_1..m_s)` for dimensions 2, 3, ...
const PARAMETERS: &[(u32, u32, &[u32])] = &[
    (1, 0, &[1]),
    (2, 1, &[1, 3]),
    (3, 1, &[1, 3, 1]),
    (3, 2, &[1, 1, 1]),
    (4, 1, &[1, 1, 3, 3]),
    (4, 4, &[1, 3, 5, 13]),
    (5, 2, &[1, 1, 5, 5, 17]),
    (5, 4, &[1, 1, 5, 5, 5]),
    (5, 7, &[1, 1, 7, 11, 19]),
    (5, 11, &[1, 1, 5, 1, 1]),
    (5, 13, &[1, 1, 1, 3, 11]),
    (5, 14, &[1, 3, 5, 5, 31]),
    (6, 1, &[1, 3, 3, 9, 7, 49]),
    (6, 13, &[1, 1, 1, 15, 21, 21]),
    (6, 16, &[1, 3, 1, 13, 27, 49]),
    (6, 19, &[1, 1, 1, 15, 7, 5]),
    (6, 22, &[1, 3, 1, 15, 13, 25]),
    (6, 25, &[1, 1, 5, 5, 19, 61]),
    (7, 1, &[1, 3, 7, 11, 23, 15, 103]),
    (7, 4, &[1, 3, 7, 13, 13, 15, 69]),
    (7, 7, &[1, 1, 3, 13, 7, 35, 63]),
    (7, 8, &[1, 3, 5, 9, 1, 25, 53]),
    (7, 14, &[1, 3, 1, 13, 9, 35, 107]),
    (7, 19, &[1, 3, 1, 5, 27, 61, 31]),
    (7, 21, &[1, 1, 5, 11, 19, 41, 61]),
    (7, 28, &[1, 3, 5, 3, 3, 13, 69]),
    (7, 31, &[1, 1, 7, 13, 1, 19, 1]),
    (7, 32, &[1, 3, 7, 5, 13, 19, 59]),
    (7, 37, &[1, 1, 3, 9, 25, 29, 41]),
    (7, 41, &[1, 3, 5, 13, 23, 1, 55]),
    (7, 42, &[1, 3, 7, 3, 13, 59, 17]),
    // searched initial numbers from here on
    (7, 50, &[1, 1, 7, 1, 27, 51, 25]),
    (7, 55, &[1, 1, 7, 13, 15, 59, 3]),
    (7, 56, &[1, 3, 1, 9, 5, 19, 69]),
    (7, 59, &[1, 3, 1, 7, 31, 13, 91]),
    (7, 62, &[1, 1, 3, 3, 13, 57, 65]),
    (8, 14, &[1, 1, 1, 1, 7, 19, 99, 159]),
    (8, 21, &[1, 3, 7, 11, 25, 39, 17, 103]),
    (8, 22, &[1, 1, 7, 5, 7, 23, 117, 217]),
    (8, 38, &[1, 1, 7, 3, 21, 57, 71, 175]),
    (8, 47, &[1, 1, 3, 11, 9, 57, 23, 197]),
    (8, 49, &[1, 3, 1, 11, 13, 41, 59, 161]),
    (8, 50, &[1, 3, 5, 5, 17, 61, 39, 191]),
    (8, 52, &[1, 3, 5, 1, 13, 33, 113, 209]),
    (8, 56, &[1, 3, 3, 13, 3, 29, 121, 191]),
    (8, 67, &[1, 3, 3, 11, 27, 35, 91, 33]),
    (8, 70, &[1, 3, 3, 5, 15, 47, 45, 101]),
    (8, 84, &[1, 3, 3, 9, 5, 37, 43, 241]),
    (8, 97, &[1, 3, 7, 9, 9, 3, 23, 245]),
    (8, 103, &[1, 3, 3, 3, 21, 17, 57, 255]),
    (8, 115, &[1, 3, 5, 13, 31, 35, 29, 195]),
    (8, 122, &[1, 3, 1, 5, 17, 5, 53, 239]),
    (9, 8, &[1, 3, 7, 1, 1, 21, 11, 65, 459]),
    (9, 13, &[1, 3, 1, 1, 3, 37, 55, 99, 229]),
    (9, 16, &[1, 3, 3, 3, 15, 21, 71, 235, 73]),
    (9, 22, &[1, 1, 1, 15, 11, 17, 33, 77, 501]),
    (9, 25, &[1, 1, 3, 13, 1, 27, 123, 235, 295]),
    (9, 44, &[1, 1, 3, 3, 3, 11, 83, 203, 175]),
    (9, 47, &[1, 1, 3, 5, 15, 29, 61, 101, 159]),
    (9, 52, &[1, 1, 3, 13, 31, 35, 25, 121, 183]),
    (9, 55, &[1, 1, 3, 11, 7, 35, 35, 27, 301]),
    (9, 59, &[1, 3, 1, 15, 19, 37, 73, 235, 107]),
    (9, 62, &[1, 1, 1, 1, 31, 9, 87, 43, 343]),
    (9, 67, &[1, 3, 3, 3, 13, 47, 123, 151, 325]),
    (9, 74, &[1, 3, 1, 5, 27, 23, 29, 157, 73]),
    (9, 81, &[1, 3, 5, 9, 9, 25, 19, 57, 309]),
    (9, 82, &[1, 3, 3, 9, 17, 31, 105, 205, 153]),
    (9, 87, &[1, 1, 1, 3, 23, 33, 31, 85, 473]),
    (9, 91, &[1, 1, 7, 5, 29, 37, 89, 253, 233]),
    (9, 94, &[1, 3, 3, 13, 11, 7, 59, 247, 19]),
    (9, 103, &[1, 1, 7, 13, 27, 37, 47, 243, 321]),
    (9, 104, &[1, 1, 7, 13, 9, 13, 33, 55, 121]),
    (9, 109, &[1, 1, 5, 11, 7, 11, 19, 29, 199]),
    (9, 122, &[1, 3, 3, 5, 13, 61, 83, 49, 117]),
    (9, 124, &[1, 3, 1, 15, 9, 27, 117, 3, 285]),
    (9, 137, &[1, 3, 5, 7, 5, 7, 39, 237, 227]),
    (9, 138, &[1, 1, 5, 3, 1, 53, 111, 55, 495]),
    (9, 143, &[1, 1, 1, 9, 21, 25, 57, 5, 235]),
    (9, 145, &[1, 1, 1, 13, 17, 41, 109, 9, 507]),
    (9, 152, &[1, 3, 7, 7, 3, 13, 125, 157, 481]),
    (9, 157, &[1, 1, 7, 9, 15, 17, 73, 153, 183]),
    (9, 167, &[1, 1, 3, 15, 5, 11, 115, 177, 257]),
    (9, 173, &[1, 1, 1, 3, 11, 39, 35, 251, 379]),
    (9, 176, &[1, 1, 7, 15, 21, 43, 7, 47, 211]),
    (9, 181, &[1, 1, 5, 5, 21, 61, 109, 29, 21]),
    (9, 182, &[1, 1, 7, 9, 17, 49, 119, 137, 117]),
    (9, 185, &[1, 1, 3, 1, 19, 13, 19, 35, 133]),
    (9, 191, &[1, 3, 1, 11, 25, 7, 99, 181, 265]),
    (9, 194, &[1, 3, 5, 13, 15, 19, 121, 87, 27]),
    (9, 199, &[1, 1, 3, 3, 15, 25, 59, 37, 337]),
    (9, 218, &[1, 3, 7, 5, 3, 59, 97, 77, 465]),
    (9, 220, &[1, 3, 1, 11, 7, 7, 69, 9, 11]),
    (9, 227, &[1, 1, 5, 9, 17, 3, 41, 43, 293]),
    (9, 229, &[1, 3, 7, 1, 5, 27, 99, 169, 133]),
    (9, 230, &[1, 1, 1, 3, 3, 3, 127, 63, 491]),
    (9, 234, &[1, 1, 7, 9, 13, 57, 115, 109, 135]),
    (9, 236, &[1, 3, 1, 1, 29, 47, 89, 1, 269]),
    (9, 241, &[1, 3, 1, 3, 23, 13, 95, 69, 435]),
    (9, 244, &[1, 3, 3, 9, 13, 9, 35, 247, 399]),
    (9, 253, &[1, 1, 7, 5, 3, 19, 121, 49, 59]),
    (10, 4, &[1, 3, 7, 1, 1, 53, 97, 113, 67, 87]),
    (10, 13, &[1, 3, 5, 7, 27, 59, 51, 91, 149, 329]),
    (10, 19, &[1, 1, 3, 13, 27, 23, 17, 137, 199, 451]),
    (10, 22, &[1, 1, 7, 1, 11, 53, 57, 247, 267, 507]),
    (10, 50, &[1, 1, 1, 11, 13, 39, 25, 67, 29, 95]),
    (10, 55, &[1, 1, 1, 11, 19, 17, 7, 169, 365, 293]),
    (10, 64, &[1, 3, 3, 1, 11, 13, 51, 213, 365, 321]),
    (10, 69, &[1, 3, 5, 11, 31, 33, 37, 115, 263, 579]),
    (10, 98, &[1, 1, 7, 13, 31, 17, 95, 203, 505, 203]),
    (10, 107, &[1, 3, 7, 3, 15, 17, 117, 101, 41, 255]),
    (10, 115, &[1, 3, 3, 15, 9, 31, 17, 37, 493, 185]),
    (10, 121, &[1, 3, 1, 9, 27, 21, 69, 33, 433, 105]),
    (10, 127, &[1, 1, 1, 3, 17, 49, 11, 117, 9, 889]),
    (10, 134, &[1, 3, 7, 11, 25, 37, 93, 217, 23, 525]),
    (10, 140, &[1, 1, 3, 5, 5, 21, 13, 161, 33, 521]),
    (10, 145, &[1, 1, 5, 1, 9, 47, 73, 245, 313, 899]),
    (10, 152, &[1, 3, 7, 15, 5, 45, 7, 255, 435, 953]),
    (10, 158, &[1, 1, 7, 11, 13, 25, 31, 117, 345, 587]),
    (10, 161, &[1, 3, 1, 5, 17, 17, 15, 93, 13, 417]),
    (10, 171, &[1, 3, 5, 15, 15, 59, 17, 35, 151, 885]),
    (10, 181, &[1, 3, 3, 7, 29, 63, 1, 77, 351, 353]),
    (10, 194, &[1, 3, 1, 15, 11, 43, 75, 143, 481, 55]),
    (10, 199, &[1, 3, 1, 9, 27, 3, 125, 17, 195, 403]),
    (10, 203, &[1, 3, 7, 1, 11, 43, 9, 81, 111, 67]),
    (10, 208, &[1, 3, 7, 3, 7, 33, 77, 5, 103, 755]),
    (10, 227, &[1, 1, 7, 5, 23, 15, 31, 225, 395, 433]),
    (10, 242, &[1, 1, 3, 13, 5, 11, 81, 173, 161, 553]),
    (10, 251, &[1, 3, 1, 1, 7, 27, 43, 51, 459, 701]),
    (10, 253, &[1, 1, 3, 13, 11, 37, 87, 43, 429, 419]),
    (10, 265, &[1, 1, 1, 3, 15, 33, 9, 135, 183, 287]),
    (10, 266, &[1, 3, 7, 3, 15, 23, 37, 127, 145, 565]),
    (10, 274, &[1, 1, 5, 7, 15, 5, 111, 105, 383, 987]),
    (10, 283, &[1, 1, 1, 9, 9, 15, 19, 51, 3, 119]),
    (10, 289, &[1, 3, 1, 15, 13, 41, 3, 103, 175, 545]),
    (10, 295, &[1, 1, 5, 11, 9, 27, 11, 155, 471, 165]),
    (10, 301, &[1, 3, 3, 11, 27, 23, 79, 37, 265, 919]),
    (10, 316, &[1, 1, 1, 7, 31, 47, 89, 181, 103, 867]),
    (10, 319, &[1, 1, 7, 13, 13, 37, 63, 199, 49, 701]),
    (10, 324, &[1, 1, 3, 1, 23, 23, 7, 179, 63, 443]),
    (10, 346, &[1, 1, 7, 5, 1, 11, 11, 211, 495, 121]),
    (10, 352, &[1, 1, 5, 5, 5, 7, 63, 143, 19, 821]),
    (10, 361, &[1, 1, 5, 15, 29, 7, 125, 85, 369, 1019]),
    (10, 367, &[1, 1, 3, 13, 27, 19, 107, 131, 19, 867]),
    (10, 382, &[1, 1, 7, 1, 19, 1, 117, 155, 387, 131]),
    (10, 395, &[1, 1, 7, 3, 31, 27, 25, 155, 223, 65]),
    (10, 398, &[1, 3, 5, 11, 7, 3, 41, 221, 37, 463]),
    (10, 400, &[1, 1, 7, 15, 15, 45, 21, 235, 447, 317]),
    (10, 412, &[1, 1, 5, 15, 25, 59, 125, 29, 305, 245]),
    (10, 419, &[1, 1, 5, 9, 3, 5, 13, 187, 65, 449]),
    (10, 422, &[1, 3, 7, 11, 25, 29, 35, 129, 45, 495]),
    (10, 426, &[1, 3, 7, 1, 31, 7, 29, 167, 235, 371]),
    (10, 428, &[1, 1, 1, 7, 29, 29, 101, 203, 229, 373]),
    (10, 433, &[1, 1, 5, 7, 17, 1, 93, 205, 395, 597]),
    (10, 446, &[1, 1, 5, 9, 7, 29, 71, 231, 377, 457]),
    (10, 454, &[1, 3, 7, 9, 5, 37, 45, 45, 459, 955]),
    (10, 457, &[1, 1, 1, 7, 21, 11, 15, 77, 465, 341]),
    (10, 472, &[1, 1, 5, 11, 21, 35, 101, 11, 205, 203]),
    (10, 493, &[1, 1, 3, 7, 7, 61, 49, 81, 379, 789]),
    (10, 505, &[1, 1, 7, 15, 7, 25, 33, 77, 347, 169]),
    (10, 508, &[1, 3, 7, 15, 23, 63, 75, 203, 79, 307]),
    (11, 2, &[1, 1, 1, 3, 21, 45, 65, 143, 437, 71, 649]),
    (11, 11, &[1, 1, 5, 9, 1, 1, 107, 27, 7, 409, 627]),
    (11, 21, &[1, 3, 1, 15, 15, 49, 115, 121, 67, 531, 1709]),
    (11, 22, &[1, 3, 7, 7, 31, 31, 75, 169, 289, 723, 1447]),
    (11, 35, &[1, 3, 5, 5, 21, 63, 103, 231, 19, 717, 141]),
    (11, 49, &[1, 3, 5, 3, 5, 15, 35, 145, 487, 863, 1493]),
    (11, 50, &[1, 3, 5, 9, 5, 33, 81, 167, 359, 247, 725]),
    (11, 56, &[1, 1, 1, 13, 27, 19, 117, 51, 213, 271, 719]),
    (11, 61, &[1, 1, 1, 1, 21, 11, 45, 81, 313, 629, 831]),
    (11, 70, &[1, 1, 5, 7, 15, 7, 43, 201, 201, 247, 1445]),
    (11, 74, &[1, 3, 7, 3, 23, 35, 109, 123, 483, 629, 1323]),
    (11, 79, &[1, 3, 3, 13, 17, 33, 49, 67, 55, 173, 1625]),
    (11, 84, &[1, 1, 1, 1, 29, 9, 113, 187, 409, 741, 379]),
    (11, 88, &[1, 1, 7, 7, 19, 7, 73, 241, 39, 561, 2007]),
    (11, 103, &[1, 3, 5, 1, 27, 41, 1, 187, 41, 83, 1135]),
    (11, 104, &[1, 1, 5, 1, 11, 27, 67, 219, 459, 491, 917]),
    (11, 112, &[1, 1, 5, 13, 17, 39, 61, 103, 229, 763, 1639]),
    (11, 115, &[1, 1, 7, 1, 11, 41, 57, 65, 367, 845, 1195]),
    (11, 117, &[1, 3, 5, 15, 11, 41, 15, 235, 5, 443, 843]),
    (11, 122, &[1, 1, 7, 11, 25, 11, 59, 105, 163, 333, 1975]),
    (11, 134, &[1, 3, 3, 11, 25, 63, 61, 21, 377, 891, 1997]),
    (11, 137, &[1, 1, 3, 9, 15, 17, 121, 155, 203, 53, 307]),
    (11, 146, &[1, 1, 1, 5, 15, 3, 13, 255, 345, 297, 573]),
    (11, 148, &[1, 3, 1, 11, 7, 47, 105, 153, 511, 949, 777]),
    (11, 157, &[1, 3, 5, 5, 5, 29, 83, 69, 473, 827, 1087]),
    (11, 158, &[1, 1, 7, 9, 21, 41, 59, 245, 65, 745, 1685]),
    (11, 162, &[1, 1, 1, 5, 5, 61, 63, 109, 191, 975, 1765]),
    (11, 164, &[1, 1, 5, 5, 17, 41, 11, 141, 1, 127, 1923]),
    (11, 168, &[1, 1, 7, 11, 29, 31, 43, 51, 405, 129, 1473]),
    (11, 173, &[1, 3, 5, 7, 23, 49, 63, 35, 263, 827, 1535]),
    (11, 185, &[1, 3, 7, 5, 17, 15, 89, 239, 275, 255, 1445]),
    (11, 186, &[1, 1, 3, 7, 29, 33, 71, 75, 263, 603, 7]),
    (11, 191, &[1, 1, 3, 3, 9, 43, 125, 225, 187, 931, 1633]),
    (11, 193, &[1, 1, 3, 13, 17, 41, 75, 47, 323, 83, 569]),
    (11, 199, &[1, 1, 7, 15, 15, 45, 61, 231, 139, 427, 1857]),
    (11, 213, &[1, 3, 3, 15, 23, 23, 21, 63, 447, 49, 1171]),
    (11, 214, &[1, 1, 3, 1, 13, 13, 113, 205, 11, 721, 1677]),
    (11, 220, &[1, 1, 5, 1, 9, 19, 61, 231, 301, 999, 1493]),
    (11, 227, &[1, 3, 5, 15, 15, 29, 115, 161, 459, 581, 1021]),
    (11, 236, &[1, 1, 3, 5, 13, 5, 93, 33, 101, 499, 697]),
    (11, 242, &[1, 1, 3, 9, 19, 51, 37, 73, 283, 725, 193]),
    (11, 251, &[1, 1, 1, 15, 19, 35, 45, 105, 293, 269, 1183]),
    (11, 256, &[1, 3, 7, 3, 31, 51, 13, 119, 79, 793, 77]),
    (11, 259, &[1, 3, 5, 11, 1, 47, 109, 197, 83, 835, 1943]),
    (11, 265, &[1, 3, 7, 9, 11, 43, 73, 225, 105, 459, 271]),
    (11, 266, &[1, 1, 1, 9, 31, 29, 59, 63, 95, 151, 1541]),
    (11, 276, &[1, 1, 7, 3, 9, 55, 83, 239, 187, 409, 457]),
    (11, 292, &[1, 1, 5, 3, 5, 35, 27, 75, 243, 791, 1735]),
    (11, 304, &[1, 1, 5, 15, 27, 31, 89, 159, 119, 185, 1571]),
    (11, 310, &[1, 1, 7, 13, 19, 39, 25, 143, 413, 591, 987]),
    (11, 316, &[1, 1, 7, 5, 11, 61, 17, 141, 231, 901, 1419]),
    (11, 319, &[1, 1, 1, 7, 11, 1, 107, 7, 19, 725, 195]),
    (11, 322, &[1, 3, 7, 11, 27, 47, 35, 77, 223, 27, 21]),
    (11, 328, &[1, 1, 1, 3, 13, 19, 107, 91, 261, 309, 683]),
    (11, 334, &[1, 1, 7, 11, 19, 11, 1, 147, 45, 843, 795]),
    (11, 339, &[1, 1, 5, 9, 15, 49, 45, 61, 263, 207, 1153]),
    (11, 341, &[1, 3, 7, 7, 3, 15, 47, 47, 175, 205, 247]),
    (11, 345, &[1, 3, 5, 1, 23, 9, 37, 175, 501, 133, 1059]),
    (11, 346, &[1, 1, 7, 9, 7, 7, 31, 211, 335, 699, 443]),
    (11, 362, &[1, 1, 7, 15, 3, 35, 71, 189, 219, 1017, 1621]),
    (11, 367, &[1, 1, 3, 9, 27, 59, 83, 175, 57, 133, 1047]),
    (11, 372, &[1, 1, 5, 7, 3, 31, 57, 39, 219, 189, 1061]),
    (11, 375, &[1, 3, 3, 3, 3, 3, 67, 35, 307, 191, 413]),
    (11, 376, &[1, 1, 7, 7, 25, 49, 45, 87, 261, 899, 579]),
    (11, 381, &[1, 3, 1, 7, 5, 3, 83, 239, 143, 461, 2009]),
    (11, 385, &[1, 1, 3, 7, 23, 55, 117, 125, 25, 567, 1783]),
    (11, 388, &[1, 3, 3, 3, 13, 5, 111, 95, 37, 345, 629]),
    (11, 392, &[1, 1, 5, 3, 13, 15, 13, 49, 405, 849, 1743]),
    (11, 409, &[1, 3, 7, 13, 29, 13, 75, 203, 471, 585, 1619]),
    (11, 415, &[1, 3, 7, 13, 31, 59, 5, 159, 153, 685, 579]),
    (11, 416, &[1, 3, 7, 13, 19, 51, 65, 65, 9, 321, 1187]),
    (11, 421, &[1, 3, 3, 13, 25, 49, 31, 251, 231, 85, 87]),
    (11, 428, &[1, 3, 7, 5, 29, 29, 105, 101, 361, 999, 1837]),
    (11, 431, &[1, 1, 1, 3, 5, 45, 17, 91, 321, 97, 1763]),
    (11, 434, &[1, 1, 1, 1, 17, 13, 57, 199, 339, 693, 1309]),
    (11, 439, &[1, 3, 3, 3, 13, 27, 81, 11, 139, 971, 637]),
    (11, 446, &[1, 1, 7, 3, 17, 7, 17, 19, 329, 861, 85]),
    (11, 451, &[1, 3, 7, 11, 15, 41, 73, 11, 125, 491, 1981]),
    (11, 453, &[1, 1, 5, 11, 25, 59, 121, 151, 417, 389, 859]),
    (11, 457, &[1, 1, 7, 9, 25, 9, 19, 219, 373, 641, 395]),
    (11, 458, &[1, 3, 7, 11, 17, 7, 49, 111, 335, 803, 1545]),
    (11, 471, &[1, 3, 3, 13, 19, 39, 69, 63, 311, 547, 439]),
    (11, 475, &[1, 1, 7, 13, 15, 11, 79, 127, 461, 891, 863]),
    (11, 478, &[1, 1, 3, 5, 7, 27, 73, 137, 369, 937, 321]),
    (11, 484, &[1, 1, 7, 13, 25, 61, 91, 189, 359, 981, 587]),
    (11, 493, &[1, 1, 3, 1, 21, 5, 101, 13, 191, 313, 1593]),
    (11, 494, &[1, 3, 1, 9, 11, 9, 113, 157, 127, 331, 237]),
    (11, 499, &[1, 1, 7, 3, 1, 33, 83, 225, 185, 769, 1883]),
    (11, 502, &[1, 3, 5, 5, 7, 51, 35, 69, 275, 309, 1025]),
    (11, 517, &[1, 3, 3, 7, 15, 51, 5, 195, 85, 741, 1497]),
    (11, 518, &[1, 3, 7, 1, 29, 9, 33, 141, 293, 1007, 785]),
    (11, 524, &[1, 3, 3, 9, 7, 61, 67, 195, 245, 895, 2035]),
    (11, 527, &[1, 3, 1, 1, 13, 19, 65, 19, 449, 923, 1281]),
    (11, 555, &[1, 1, 7, 11, 17, 29, 3, 221, 99, 299, 359]),
    (11, 560, &[1, 1, 1, 13, 23, 23, 71, 89, 153, 765, 1951]),
    (11, 565, &[1, 3, 3, 9, 5, 1, 51, 191, 457, 713, 417]),
    (11, 569, &[1, 3, 3, 3, 13, 15, 7, 95, 17, 447, 731]),
    (11, 578, &[1, 1, 1, 15, 3, 21, 99, 117, 171, 725, 899]),
    (11, 580, &[1, 1, 5, 3, 11, 55, 113, 15, 187, 473, 781]),
    (11, 587, &[1, 3, 7, 5, 7, 41, 33, 137, 435, 589, 2015]),
    (11, 589, &[1, 3, 5, 15, 11, 15, 17, 39, 29, 301, 497]),
    (11, 590, &[1, 3, 3, 7, 25, 45, 105, 155, 29, 749, 493]),
    (11, 601, &[1, 1, 3, 15, 31, 11, 71, 33, 501, 497, 1233]),
    (11, 607, &[1, 3, 7, 11, 9, 15, 121, 85, 91, 727, 2043]),
    (11, 611, &[1, 3, 3, 1, 7, 37, 107, 151, 87, 81, 689]),
    (11, 614, &[1, 3, 3, 15, 25, 37, 89, 15, 129, 771, 977]),
    (11, 617, &[1, 1, 5, 5, 27, 23, 89, 21, 255, 199, 1603]),
    (11, 618, &[1, 1, 3, 15, 9, 19, 49, 81, 173, 859, 1841]),
    (11, 625, &[1, 1, 5, 13, 25, 15, 1, 201, 367, 23, 229]),
    (11, 628, &[1, 1, 1, 7, 3, 39, 77, 175, 109, 5, 855]),
    (11, 635, &[1, 3, 5, 3, 17, 21, 93, 233, 147, 749, 319]),
    (11, 641, &[1, 1, 3, 13, 11, 7, 9, 225, 139, 137, 559]),
    (11, 647, &[1, 3, 5, 15, 11, 21, 119, 75, 289, 297, 271]),
    (11, 654, &[1, 3, 7, 15, 25, 33, 91, 41, 487, 257, 1855]),
    (11, 659, &[1, 1, 1, 1, 19, 35, 105, 169, 419, 787, 915]),
    (11, 662, &[1, 1, 1, 15, 31, 37, 115, 163, 293, 919, 1599]),
    (11, 672, &[1, 3, 7, 13, 25, 29, 115, 195, 419, 125, 1357]),
    (11, 675, &[1, 1, 5, 1, 7, 39, 105, 139, 359, 133, 317]),
    (11, 682, &[1, 1, 5, 13, 13, 59, 95, 111, 503, 51, 1947]),
    (11, 684, &[1, 1, 5, 5, 29, 17, 45, 51, 167, 219, 1491]),
    (11, 689, &[1, 1, 3, 7, 9, 3, 13, 39, 361, 1005, 763]),
    (11, 695, &[1, 1, 5, 11, 19, 11, 125, 125, 251, 727, 229]),
    (11, 696, &[1, 3, 5, 5, 23, 17, 125, 55, 227, 857, 435]),
    (11, 713, &[1, 3, 7, 7, 25, 41, 7, 189, 511, 839, 291]),
    (11, 719, &[1, 1, 1, 15, 31, 45, 35, 27, 211, 467, 1639]),
    (11, 724, &[1, 3, 3, 3, 9, 59, 53, 43, 499, 975, 581]),
    (11, 733, &[1, 3, 5, 9, 15, 7, 107, 169, 327, 481, 27]),
    (11, 734, &[1, 3, 3, 5, 17, 31, 113, 147, 137, 297, 1741]),
    (11, 740, &[1, 3, 5, 5, 23, 43, 75, 17, 123, 813, 321]),
    (11, 747, &[1, 1, 5, 15, 29, 23, 117, 71, 69, 303, 1937]),
    (11, 749, &[1, 3, 3, 1, 29, 7, 33, 69, 401, 847, 487]),
    (11, 752, &[1, 1, 5, 3, 19, 19, 109, 77, 191, 955, 471]),
    (11, 755, &[1, 1, 5, 13, 15, 7, 69, 129, 159, 597, 1727]),
    (11, 762, &[1, 1, 3, 3, 1, 41, 97, 175, 295, 809, 673]),
    (11, 770, &[1, 1, 7, 13, 23, 25, 119, 219, 127, 615, 1849]),
    (11, 782, &[1, 1, 3, 1, 23, 43, 87, 27, 327, 5, 1039]),
    (11, 784, &[1, 3, 5, 1, 7, 35, 105, 135, 247, 113, 1609]),
    (11, 787, &[1, 3, 1, 5, 27, 5, 79, 51, 171, 893, 305]),
    (11, 789, &[1, 3, 3, 1, 31, 49, 61, 59, 187, 249, 1177]),
    (11, 793, &[1, 3, 5, 15, 17, 19, 7, 183, 73, 965, 711]),
    (11, 796, &[1, 1, 3, 15, 11, 29, 59, 247, 87, 565, 1895]),
    (11, 803, &[1, 1, 1, 1, 17, 3, 89, 9, 431, 431, 1063]),
    (11, 805, &[1, 1, 3, 5, 29, 15, 99, 215, 485, 331, 135]),
    (11, 810, &[1, 3, 3, 13, 15, 41, 41, 181, 251, 411, 1393]),
    (11, 815, &[1, 1, 3, 3, 25, 57, 59, 33, 15, 297, 79]),
    (11, 824, &[1, 1, 1, 1, 25, 5, 125, 217, 151, 615, 1683]),
    (11, 829, &[1, 3, 5, 13, 19, 35, 113, 61, 233, 779, 1089]),
    (11, 830, &[1, 3, 3, 15, 9, 15, 49, 87, 425, 657, 1829]),
    (11, 832, &[1, 3, 5, 13, 21, 5, 83, 243, 187, 315, 757]),
    (11, 841, &[1, 1, 1, 9, 19, 31, 121, 209, 363, 921, 1063]),
    (11, 847, &[1, 3, 5, 13, 17, 9, 19, 1, 189, 1005, 109]),
    (11, 849, &[1, 1, 5, 1, 27, 9, 87, 47, 285, 173, 91]),
    (11, 861, &[1, 1, 5, 9, 27, 47, 125, 7, 483, 931, 1329]),
    (11, 871, &[1, 3, 1, 1, 13, 41, 105, 79, 159, 327, 333]),
    (11, 878, &[1, 3, 1, 5, 31, 25, 29, 135, 75, 55, 947]),
    (11, 889, &[1, 1, 5, 15, 11, 45, 43, 119, 283, 623, 1871]),
    (11, 892, &[1, 3, 1, 1, 29, 19, 95, 215, 11, 787, 785]),
    (11, 901, &[1, 3, 5, 5, 19, 49, 23, 251, 231, 947, 1693]),
    (11, 908, &[1, 3, 3, 5, 27, 39, 79, 155, 311, 219, 1747]),
    (11, 920, &[1, 3, 7, 3, 17, 35, 109, 145, 53, 165, 1485]),
    (11, 923, &[1, 1, 3, 9, 9, 7, 121, 93, 347, 519, 597]),
    (11, 942, &[1, 1, 1, 9, 19, 47, 43, 131, 323, 33, 1475]),
    (11, 949, &[1, 3, 3, 3, 13, 63, 125, 137, 35, 643, 1301]),
    (11, 950, &[1, 3, 3, 5, 27, 55, 51, 177, 225, 613, 1943]),
    (11, 954, &[1, 3, 1, 7, 3, 47, 107, 5, 475, 891, 1717]),
    (11, 961, &[1, 3, 1, 9, 25, 53, 21, 157, 191, 963, 1051]),
    (11, 968, &[1, 3, 7, 7, 11, 25, 41, 27, 279, 499, 1773]),
    (11, 971, &[1, 3, 5, 3, 21, 25, 43, 95, 403, 193, 621]),
    (11, 973, &[1, 3, 1, 13, 23, 39, 65, 33, 477, 103, 1055]),
    (11, 979, &[1, 3, 7, 5, 9, 55, 127, 211, 323, 501, 1475]),
    (11, 982, &[1, 1, 5, 15, 1, 41, 37, 203, 405, 803, 481]),
    (11, 986, &[1, 3, 1, 3, 3, 37, 13, 243, 419, 61, 947]),
    (11, 998, &[1, 3, 3, 3, 27, 25, 19, 47, 309, 327, 831]),
    (11, 1001, &[1, 1, 3, 13, 7, 35, 59, 73, 105, 755, 997]),
    (11, 1010, &[1, 1, 5, 1, 15, 49, 13, 167, 329, 671, 1511]),
    (11, 1012, &[1, 1, 3, 13, 17, 17, 71, 213, 487, 393, 1907]),
    (12, 41, &[1, 1, 7, 13, 17, 5, 97, 35, 383, 123, 649, 123]),
    (12, 52, &[1, 1, 7, 7, 27, 63, 43, 9, 129, 105, 9, 139]),
    (12, 61, &[1, 1, 5, 13, 7, 9, 77, 71, 321, 311, 249, 1057]),
    (12, 62, &[1, 3, 1, 1, 1, 41, 43, 41, 103, 867, 345, 1641]),
    (12, 76, &[1, 3, 3, 13, 21, 7, 73, 227, 353, 681, 651, 743]),
    (12, 104, &[1, 3, 1, 11, 27, 45, 3, 249, 343, 593, 829, 175]),
    (12, 117, &[1, 1, 7, 7, 7, 1, 21, 15, 55, 951, 283, 665]),
    (12, 131, &[1, 1, 1, 15, 9, 1, 41, 215, 395, 587, 597, 3205]),
    (12, 143, &[1, 3, 7, 15, 1, 9, 1, 57, 113, 639, 2029, 3215]),
    (12, 145, &[1, 3, 7, 3, 5, 61, 51, 33, 491, 911, 975, 1505]),
    (12, 157, &[1, 3, 1, 11, 3, 63, 117, 173, 113, 225, 1495, 187]),
    (12, 167, &[1, 1, 3, 15, 21, 39, 119, 177, 7, 897, 791, 1011]),
    (12, 171, &[1, 1, 1, 5, 25, 33, 1, 165, 423, 921, 897, 1375]),
    (12, 176, &[1, 3, 1, 5, 17, 13, 43, 57, 103, 643, 1219, 1325]),
    (12, 181, &[1, 3, 7, 11, 23, 43, 93, 39, 395, 783, 1783, 13]),
    (12, 194, &[1, 3, 5, 13, 5, 33, 75, 53, 265, 135, 473, 529]),
    (12, 217, &[1, 1, 1, 1, 25, 7, 47, 73, 13, 563, 1727, 499]),
    (12, 236, &[1, 3, 5, 5, 27, 39, 71, 143, 493, 707, 1451, 201]),
    (12, 239, &[1, 1, 1, 15, 21, 47, 93, 179, 457, 139, 1593, 3365]),
    (12, 262, &[1, 3, 7, 9, 17, 29, 77, 207, 309, 153, 1747, 1779]),
    (12, 283, &[1, 3, 5, 13, 7, 19, 43, 109, 413, 891, 1457, 1127]),
    (12, 286, &[1, 3, 3, 5, 11, 5, 47, 79, 75, 887, 1599, 843]),
    (12, 307, &[1, 3, 5, 11, 17, 41, 89, 135, 511, 125, 1121, 601]),
    (12, 313, &[1, 3, 1, 15, 25, 47, 99, 205, 127, 505, 1871, 37]),
    (12, 319, &[1, 1, 7, 5, 9, 63, 79, 93, 131, 913, 1071, 3909]),
    (12, 348, &[1, 3, 1, 11, 25, 31, 49, 163, 263, 645, 417, 1913]),
    (12, 352, &[1, 3, 3, 13, 31, 1, 91, 75, 163, 843, 639, 53]),
    (12, 357, &[1, 1, 3, 13, 7, 63, 37, 181, 3, 305, 867, 597]),
    (12, 391, &[1, 3, 1, 7, 25, 61, 115, 69, 77, 999, 399, 1173]),
    (12, 398, &[1, 3, 3, 15, 23, 5, 13, 47, 293, 593, 477, 1587]),
    (12, 400, &[1, 1, 7, 5, 29, 47, 95, 211, 7, 13, 511, 3157]),
    (12, 412, &[1, 3, 5, 5, 25, 57, 101, 51, 261, 283, 625, 2767]),
    (12, 415, &[1, 3, 7, 1, 31, 1, 11, 195, 17, 705, 815, 1091]),
    (12, 422, &[1, 3, 3, 7, 29, 59, 123, 43, 163, 67, 1371, 2787]),
    (12, 440, &[1, 3, 1, 5, 13, 27, 37, 27, 457, 75, 1431, 3947]),
    (12, 460, &[1, 3, 3, 11, 25, 1, 41, 135, 371, 267, 387, 259]),
    (12, 465, &[1, 1, 3, 15, 11, 33, 73, 253, 99, 711, 1731, 2741]),
    (12, 468, &[1, 3, 7, 9, 9, 59, 73, 145, 485, 677, 31, 653]),
    (12, 515, &[1, 1, 5, 1, 17, 53, 13, 171, 27, 577, 907, 3401]),
    (12, 536, &[1, 1, 5, 3, 21, 59, 51, 53, 379, 59, 895, 183]),
    (12, 539, &[1, 1, 7, 13, 7, 27, 103, 231, 355, 587, 709, 4049]),
    (12, 551, &[1, 1, 5, 15, 15, 39, 33, 43, 211, 171, 643, 623]),
    (12, 558, &[1, 3, 1, 13, 21, 25, 53, 111, 71, 493, 741, 911]),
    (12, 563, &[1, 3, 1, 7, 25, 61, 113, 255, 427, 893, 411, 2603]),
    (12, 570, &[1, 3, 7, 3, 7, 35, 35, 205, 99, 997, 1233, 3727]),
    (12, 595, &[1, 1, 7, 9, 5, 53, 103, 33, 411, 559, 1891, 3341]),
    (12, 598, &[1, 1, 1, 9, 5, 59, 95, 113, 359, 595, 1603, 3167]),
    (12, 617, &[1, 1, 5, 15, 15, 47, 105, 41, 123, 45, 1031, 3363]),
    (12, 647, &[1, 3, 7, 5, 29, 31, 87, 85, 109, 33, 721, 831]),
    (12, 654, &[1, 1, 5, 7, 25, 39, 49, 247, 403, 519, 2037, 4023]),
    (12, 678, &[1, 3, 3, 9, 13, 57, 59, 113, 379, 781, 1187, 3585]),
    (12, 713, &[1, 1, 3, 11, 15, 13, 37, 81, 469, 745, 1523, 1337]),
    (12, 738, &[1, 1, 1, 15, 17, 61, 57, 199, 393, 797, 613, 3407]),
    (12, 747, &[1, 3, 7, 3, 27, 43, 31, 37, 289, 23, 1451, 557]),
    (12, 750, &[1, 1, 1, 11, 27, 7, 3, 77, 419, 543, 1663, 971]),
    (12, 757, &[1, 1, 3, 7, 7, 27, 55, 145, 431, 723, 1405, 2347]),
    (12, 772, &[1, 3, 1, 1, 5, 45, 55, 233, 319, 543, 1659, 851]),
    (12, 803, &[1, 1, 7, 11, 5, 43, 123, 201, 403, 321, 1795, 3261]),
    (12, 810, &[1, 1, 7, 11, 21, 63, 95, 241, 159, 121, 1699, 1999]),
    (12, 812, &[1, 3, 5, 3, 3, 5, 111, 67, 225, 515, 1967, 1847]),
    (12, 850, &[1, 1, 7, 1, 17, 45, 87, 109, 357, 319, 1545, 2433]),
    (12, 862, &[1, 3, 1, 3, 13, 15, 9, 241, 391, 671, 1839, 299]),
    (12, 906, &[1, 1, 1, 3, 17, 61, 127, 173, 63, 421, 693, 3043]),
    (12, 908, &[1, 1, 3, 11, 15, 55, 77, 103, 117, 443, 1423, 3493]),
    (12, 929, &[1, 1, 3, 5, 7, 45, 19, 227, 463, 543, 1167, 135]),
    (12, 930, &[1, 1, 7, 5, 31, 41, 55, 111, 165, 935, 929, 3077]),
    (12, 954, &[1, 3, 1, 7, 23, 33, 43, 229, 169, 199, 1659, 1]),
    (12, 964, &[1, 3, 7, 9, 23, 19, 109, 1, 363, 865, 1693, 593]),
    (12, 982, &[1, 3, 5, 7, 5, 17, 109, 29, 329, 389, 1243, 951]),
    (12, 985, &[1, 1, 3, 11, 23, 47, 51, 31, 111, 159, 1829, 1899]),
    (12, 991, &[1, 1, 5, 9, 21, 17, 19, 75, 179, 767, 1461, 2157]),
    (12, 992, &[1, 3, 7, 1, 3, 3, 103, 211, 395, 875, 1475, 1843]),
    (12, 1067, &[1, 3, 7, 9, 29, 25, 25, 17, 139, 399, 1687, 2921]),
    (12, 1070, &[1, 3, 3, 7, 15, 57, 127, 69, 511, 243, 225, 2421]),
    (12, 1096, &[1, 3, 7, 3, 1, 49, 81, 37, 477, 589, 1651, 1561]),
    (12, 1099, &[1, 3, 5, 15, 11, 49, 21, 97, 425, 403, 1111, 3505]),
    (12, 1116, &[1, 1, 1, 7, 7, 31, 7, 129, 109, 31, 1997, 2205]),
    (12, 1143, &[1, 1, 1, 15, 11, 39, 37, 129, 489, 981, 555, 301]),
    (12, 1165, &[1, 1, 5, 15, 29, 23, 69, 253, 327, 551, 643, 2747]),
    (12, 1178, &[1, 1, 7, 3, 3, 53, 77, 17, 335, 509, 1909, 2745]),
    (12, 1184, &[1, 3, 5, 9, 19, 27, 13, 153, 385, 351, 1621, 2135]),
    (12, 1202, &[1, 3, 5, 9, 21, 45, 5, 207, 273, 157, 213, 1279]),
    (12, 1213, &[1, 1, 3, 3, 23, 1, 69, 107, 123, 75, 1185, 2283]),
    (12, 1221, &[1, 3, 1, 3, 27, 51, 91, 211, 29, 891, 1611, 1313]),
    (12, 1240, &[1, 1, 7, 15, 17, 49, 1, 69, 451, 683, 1463, 2813]),
    (12, 1246, &[1, 3, 5, 13, 15, 49, 95, 47, 389, 583, 567, 3265]),
    (12, 1252, &[1, 3, 3, 5, 13, 19, 17, 195, 71, 675, 655, 2855]),
    (12, 1255, &[1, 3, 5, 11, 27, 25, 51, 29, 429, 449, 351, 2051]),
    (12, 1267, &[1, 1, 3, 7, 21, 43, 33, 209, 225, 913, 1007, 2829]),
    (12, 1293, &[1, 3, 3, 7, 31, 45, 73, 111, 453, 961, 1431, 1999]),
    (12, 1301, &[1, 3, 5, 7, 31, 29, 99, 33, 367, 345, 497, 2289]),
    (12, 1305, &[1, 3, 5, 15, 1, 47, 121, 55, 11, 661, 429, 3631]),
    (12, 1332, &[1, 3, 1, 15, 25, 63, 119, 205, 369, 353, 9, 3823]),
    (12, 1349, &[1, 1, 7, 1, 17, 37, 111, 31, 67, 183, 83, 1139]),
    (12, 1384, &[1, 1, 7, 3, 1, 35, 61, 193, 159, 117, 651, 3717]),
    (12, 1392, &[1, 1, 3, 3, 21, 35, 13, 15, 307, 807, 511, 3397]),
    (12, 1402, &[1, 1, 7, 5, 11, 55, 95, 241, 335, 343, 183, 3733]),
    (12, 1413, &[1, 1, 1, 7, 7, 37, 43, 199, 81, 677, 25, 2043]),
    (12, 1417, &[1, 3, 3, 1, 29, 41, 79, 147, 91, 123, 1591, 2077]),
    (12, 1423, &[1, 1, 1, 15, 11, 63, 107, 159, 325, 931, 1231, 1113]),
    (12, 1451, &[1, 3, 1, 15, 1, 5, 9, 149, 75, 419, 709, 2747]),
    (12, 1480, &[1, 3, 1, 11, 5, 7, 115, 193, 395, 489, 1833, 143]),
    (12, 1491, &[1, 1, 7, 3, 15, 19, 111, 197, 309, 757, 283, 2011]),
    (12, 1503, &[1, 3, 1, 7, 9, 41, 67, 171, 419, 327, 205, 1985]),
    (12, 1504, &[1, 1, 3, 7, 27, 45, 9, 191, 331, 447, 261, 1619]),
    (12, 1513, &[1, 3, 1, 13, 21, 55, 117, 235, 357, 523, 1119, 97]),
    (12, 1538, &[1, 1, 3, 5, 19, 9, 121, 63, 27, 607, 969, 187]),
    (12, 1544, &[1, 3, 3, 11, 25, 23, 1, 7, 177, 713, 1501, 459]),
    (12, 1547, &[1, 1, 7, 3, 29, 7, 73, 47, 477, 587, 1739, 2883]),
    (12, 1555, &[1, 3, 3, 1, 7, 19, 101, 223, 259, 325, 1549, 2609]),
    (12, 1574, &[1, 1, 3, 9, 5, 49, 99, 9, 183, 805, 795, 3513]),
    (12, 1603, &[1, 3, 7, 11, 23, 3, 95, 81, 295, 303, 1899, 549]),
    (12, 1615, &[1, 3, 1, 1, 13, 53, 53, 159, 205, 233, 141, 3761]),
    (12, 1618, &[1, 3, 5, 9, 11, 41, 59, 163, 235, 595, 1343, 3521]),
    (12, 1629, &[1, 3, 1, 5, 5, 11, 9, 129, 175, 129, 1309, 3525]),
    (12, 1634, &[1, 1, 3, 9, 23, 5, 115, 19, 359, 643, 1765, 1035]),
    (12, 1636, &[1, 1, 3, 5, 3, 33, 7, 83, 249, 25, 2043, 3729]),
    (12, 1639, &[1, 3, 1, 15, 17, 37, 45, 63, 73, 961, 1775, 2085]),
    (12, 1657, &[1, 1, 1, 9, 25, 63, 121, 25, 51, 945, 943, 3727]),
    (12, 1667, &[1, 3, 5, 1, 1, 23, 65, 113, 169, 273, 929, 2495]),
    (12, 1681, &[1, 3, 5, 9, 9, 19, 99, 129, 3, 743, 1625, 2971]),
    (12, 1697, &[1, 1, 5, 13, 1, 53, 95, 203, 317, 517, 183, 2451]),
    (12, 1704, &[1, 1, 7, 15, 15, 49, 111, 155, 171, 393, 61, 2917]),
    (12, 1709, &[1, 3, 7, 1, 25, 19, 29, 119, 35, 489, 761, 2849]),
    (12, 1722, &[1, 3, 3, 11, 9, 51, 115, 119, 239, 187, 841, 129]),
    (12, 1730, &[1, 1, 5, 3, 7, 1, 95, 11, 497, 133, 515, 3965]),
    (12, 1732, &[1, 3, 5, 5, 31, 3, 1, 109, 375, 783, 1943, 759]),
    (12, 1802, &[1, 1, 1, 13, 7, 43, 111, 207, 13, 501, 1855, 647]),
    (12, 1804, &[1, 1, 3, 7, 5, 1, 51, 37, 469, 1015, 127, 3059]),
    (12, 1815, &[1, 1, 1, 9, 7, 59, 101, 167, 465, 157, 101, 2507]),
    (12, 1826, &[1, 1, 5, 15, 27, 53, 57, 19, 483, 271, 1381, 3107]),
    (12, 1832, &[1, 1, 3, 3, 25, 43, 59, 205, 37, 483, 905, 1043]),
    (12, 1843, &[1, 1, 3, 3, 17, 11, 49, 77, 225, 655, 1305, 2297]),
    (12, 1849, &[1, 1, 1, 3, 15, 45, 125, 9, 307, 625, 1649, 617]),
    (12, 1863, &[1, 1, 3, 5, 5, 59, 107, 85, 25, 515, 1261, 2571]),
    (12, 1905, &[1, 3, 7, 5, 1, 61, 15, 151, 179, 229, 693, 1391]),
    (12, 1928, &[1, 3, 1, 1, 17, 31, 67, 25, 415, 693, 287, 901]),
    (12, 1933, &[1, 1, 7, 7, 15, 29, 19, 83, 397, 461, 1339, 13]),
    (12, 1939, &[1, 3, 1, 15, 19, 29, 17, 141, 85, 263, 665, 317]),
    (12, 1976, &[1, 1, 1, 13, 11, 15, 77, 91, 183, 291, 1059, 2811]),
    (12, 1996, &[1, 1, 5, 9, 1, 11, 113, 1, 193, 1021, 691, 3175]),
    (12, 2013, &[1, 3, 1, 1, 31, 47, 61, 117, 469, 993, 611, 1829]),
    (12, 2014, &[1, 1, 3, 15, 23, 21, 13, 141, 211, 735, 1351, 2907]),
    (12, 2020, &[1, 3, 5, 7, 9, 43, 3, 53, 221, 727, 135, 343]),
    (13, 13, &[1, 1, 3, 13, 23, 17, 43, 161, 95, 479, 1137, 857, 4157]),
    (13, 19, &[1, 1, 1, 15, 13, 33, 9, 225, 307, 419, 391, 671, 249]),
    (13, 26, &[1, 3, 1, 15, 11, 3, 61, 67, 243, 293, 1853, 2967, 6615]),
    (13, 41, &[1, 1, 7, 1, 5, 55, 59, 89, 391, 367, 641, 1543, 4491]),
    (13, 50, &[1, 3, 5, 11, 19, 43, 45, 13, 505, 373, 1465, 2989, 2449]),
    (13, 55, &[1, 3, 3, 1, 27, 47, 45, 113, 229, 683, 1069, 2947, 4711]),
    (13, 69, &[1, 1, 3, 3, 7, 25, 11, 33, 327, 869, 1633, 2181, 7221]),
    (13, 70, &[1, 3, 1, 3, 13, 19, 87, 253, 387, 663, 1775, 4067, 207]),
    (13, 79, &[1, 1, 7, 1, 1, 11, 95, 141, 179, 243, 743, 1909, 529]),
    (13, 82, &[1, 1, 1, 3, 19, 41, 57, 177, 391, 607, 229, 505, 4151]),
    (13, 87, &[1, 1, 5, 5, 21, 3, 47, 187, 199, 721, 1157, 311, 3969]),
    (13, 93, &[1, 1, 3, 11, 19, 53, 77, 107, 161, 331, 235, 301, 6229]),
    (13, 94, &[1, 1, 3, 5, 9, 47, 121, 77, 79, 89, 1273, 179, 5105]),
    (13, 97, &[1, 3, 7, 7, 29, 29, 11, 35, 237, 661, 1989, 863, 8061]),
    (13, 100, &[1, 3, 3, 9, 5, 49, 101, 71, 491, 633, 1157, 3347, 5669]),
    (13, 112, &[1, 1, 3, 7, 29, 43, 83, 53, 13, 23, 1715, 2225, 3043]),
    (13, 121, &[1, 3, 7, 11, 11, 13, 127, 31, 211, 207, 931, 3959, 4775]),
    (13, 134, &[1, 3, 5, 5, 3, 43, 19, 129, 425, 193, 75, 371, 6501]),
    (13, 138, &[1, 3, 5, 1, 1, 55, 45, 239, 375, 849, 687, 2069, 2775]),
    (13, 148, &[1, 1, 3, 1, 21, 53, 47, 203, 263, 743, 473, 3989, 567]),
    (13, 151, &[1, 3, 7, 7, 17, 37, 109, 227, 327, 277, 233, 3245, 6891]),
    (13, 157, &[1, 1, 3, 13, 13, 21, 53, 241, 235, 605, 453, 991, 3607]),
    (13, 161, &[1, 1, 1, 9, 25, 15, 17, 201, 395, 883, 701, 55, 677]),
    (13, 179, &[1, 3, 3, 3, 23, 7, 69, 11, 213, 109, 1019, 1025, 2433]),
    (13, 181, &[1, 3, 1, 7, 7, 5, 87, 57, 503, 619, 1815, 3471, 5207]),
    (13, 188, &[1, 3, 3, 1, 13, 11, 19, 113, 129, 993, 1279, 1231, 4107]),
    (13, 196, &[1, 3, 3, 15, 29, 23, 77, 245, 113, 883, 561, 2607, 1773]),
    (13, 203, &[1, 3, 5, 15, 17, 23, 75, 227, 1, 69, 1211, 681, 4021]),
    (13, 206, &[1, 3, 1, 9, 15, 7, 5, 203, 325, 273, 61, 2381, 1659]),
    (13, 223, &[1, 3, 1, 7, 11, 45, 7, 255, 407, 69, 1595, 983, 1319]),
    (13, 224, &[1, 1, 5, 1, 21, 11, 53, 91, 489, 361, 583, 1173, 6631]),
    (13, 227, &[1, 3, 5, 7, 3, 53, 3, 131, 399, 805, 2039, 7, 1053]),
    (13, 230, &[1, 3, 5, 5, 11, 23, 23, 245, 411, 91, 1729, 3153, 3355]),
    (13, 239, &[1, 3, 5, 9, 29, 23, 115, 219, 137, 923, 1287, 3423, 4951]),
    (13, 241, &[1, 1, 3, 13, 15, 31, 55, 69, 313, 313, 229, 559, 2879]),
    (13, 248, &[1, 3, 3, 13, 5, 43, 41, 79, 421, 155, 283, 1469, 5601]),
    (13, 253, &[1, 3, 1, 15, 1, 61, 11, 19, 245, 357, 2003, 1875, 4133]),
    (13, 268, &[1, 3, 1, 9, 13, 17, 97, 31, 495, 49, 321, 1873, 2031]),
    (13, 274, &[1, 3, 5, 1, 11, 3, 105, 249, 431, 511, 1401, 1881, 6635]),
    (13, 283, &[1, 3, 1, 1, 19, 63, 11, 179, 369, 887, 5, 1445, 7549]),
    (13, 286, &[1, 3, 3, 7, 17, 19, 35, 35, 459, 651, 1995, 805, 5073]),
    (13, 289, &[1, 1, 7, 3, 17, 21, 19, 189, 501, 573, 355, 79, 2875]),
    (13, 301, &[1, 1, 1, 3, 25, 23, 29, 159, 31, 841, 1091, 3371, 1367]),
    (13, 302, &[1, 1, 1, 5, 17, 9, 121, 37, 217, 947, 1149, 1261, 149]),
    (13, 316, &[1, 3, 5, 13, 23, 33, 57, 221, 13, 7, 527, 821, 3007]),
    (13, 319, &[1, 1, 5, 7, 17, 45, 3, 169, 1, 191, 1957, 3587, 4695]),
    (13, 324, &[1, 3, 5, 13, 13, 29, 73, 233, 73, 57, 783, 1915, 3267]),
    (13, 331, &[1, 3, 5, 11, 25, 7, 17, 19, 455, 53, 1343, 2449, 5003]),
    (13, 333, &[1, 3, 1, 13, 13, 55, 97, 53, 491, 285, 651, 3103, 4625]),
    (13, 345, &[1, 1, 5, 7, 9, 41, 19, 209, 111, 435, 179, 2439, 4709]),
    (13, 351, &[1, 1, 7, 11, 25, 5, 111, 3, 251, 755, 901, 3517, 3379]),
    (13, 358, &[1, 1, 1, 11, 5, 51, 61, 203, 133, 525, 695, 2815, 2313]),
    (13, 375, &[1, 3, 3, 3, 31, 3, 85, 243, 461, 563, 691, 1231, 1983]),
    (13, 379, &[1, 1, 7, 11, 17, 45, 15, 15, 211, 507, 555, 2399, 7809]),
    (13, 381, &[1, 1, 7, 3, 15, 25, 123, 101, 257, 567, 1341, 2953, 5523]),
    (13, 386, &[1, 1, 5, 9, 13, 49, 81, 29, 275, 293, 1671, 1559, 5673]),
    (13, 403, &[1, 1, 7, 1, 15, 17, 113, 75, 201, 293, 157, 3671, 1969]),
    (13, 405, &[1, 3, 7, 3, 31, 21, 93, 221, 155, 307, 1303, 2539, 7927]),
    (13, 419, &[1, 3, 3, 1, 5, 33, 105, 217, 495, 941, 1429, 2287, 6301]),
    (13, 426, &[1, 3, 5, 9, 31, 23, 83, 49, 235, 673, 1899, 1933, 4269]),
    (13, 428, &[1, 1, 1, 3, 27, 63, 53, 73, 245, 1003, 345, 3245, 6891]),
    (13, 439, &[1, 1, 7, 11, 15, 17, 49, 45, 253, 991, 1397, 3047, 1285]),
    (13, 440, &[1, 1, 7, 3, 3, 59, 55, 51, 49, 17, 645, 3195, 5605]),
    (13, 446, &[1, 3, 3, 11, 25, 49, 59, 91, 403, 19, 1959, 891, 5593]),
    (13, 451, &[1, 1, 1, 13, 13, 15, 51, 229, 113, 57, 199, 3529, 6965]),
    (13, 454, &[1, 1, 7, 15, 15, 29, 53, 15, 11, 491, 1621, 447, 6599]),
    (13, 458, &[1, 3, 7, 9, 9, 61, 89, 135, 411, 211, 1833, 3387, 7577]),
    (13, 465, &[1, 3, 5, 9, 1, 31, 25, 147, 151, 783, 1323, 1531, 1625]),
    (13, 468, &[1, 1, 1, 7, 5, 7, 83, 145, 321, 383, 673, 593, 1521]),
    (13, 472, &[1, 1, 5, 1, 1, 55, 99, 139, 95, 937, 1525, 3601, 835]),
    (13, 475, &[1, 3, 7, 1, 7, 57, 79, 235, 123, 725, 1451, 1099, 7341]),
    (13, 477, &[1, 1, 5, 13, 9, 9, 107, 115, 47, 823, 953, 3389, 7489]),
    (13, 496, &[1, 1, 1, 3, 11, 63, 77, 85, 371, 741, 2023, 1597, 3823]),
    (13, 502, &[1, 1, 5, 9, 7, 3, 21, 1, 493, 773, 1551, 2787, 6163]),
    (13, 508, &[1, 3, 7, 3, 7, 37, 41, 107, 267, 731, 347, 2205, 363]),
    (13, 517, &[1, 3, 1, 5, 17, 51, 89, 103, 285, 331, 1471, 3341, 8139]),
    (13, 521, &[1, 1, 3, 11, 25, 15, 69, 93, 145, 409, 1879, 2267, 5523]),
    (13, 527, &[1, 1, 7, 13, 5, 15, 63, 77, 327, 467, 1283, 487, 3881]),
    (13, 530, &[1, 3, 1, 15, 23, 63, 71, 177, 221, 427, 1779, 1217, 1995]),
    (13, 532, &[1, 1, 3, 5, 15, 37, 91, 255, 133, 799, 1149, 1413, 4633]),
    (13, 542, &[1, 1, 5, 5, 7, 43, 67, 251, 407, 329, 1743, 1455, 6159]),
    (13, 552, &[1, 3, 3, 3, 9, 23, 53, 151, 385, 417, 455, 3251, 4659]),
    (13, 555, &[1, 3, 3, 5, 9, 59, 123, 107, 223, 565, 743, 1675, 3325]),
    (13, 560, &[1, 1, 1, 13, 5, 23, 67, 223, 427, 771, 523, 1893, 3529]),
    (13, 566, &[1, 1, 5, 15, 27, 43, 69, 161, 331, 615, 405, 159, 1219]),
    (13, 575, &[1, 1, 1, 13, 9, 9, 27, 201, 261, 115, 527, 2279, 1905]),
    (13, 577, &[1, 1, 7, 9, 21, 9, 103, 177, 421, 407, 1619, 589, 7557]),
    (13, 589, &[1, 1, 7, 7, 17, 11, 85, 147, 247, 487, 227, 1393, 3151]),
    (13, 590, &[1, 3, 5, 5, 27, 25, 105, 239, 313, 779, 1747, 1055, 3329]),
    (13, 602, &[1, 1, 3, 13, 7, 5, 5, 223, 59, 981, 1593, 439, 4755]),
    (13, 607, &[1, 3, 5, 3, 7, 21, 25, 21, 27, 73, 1191, 305, 645]),
    (13, 608, &[1, 3, 7, 3, 25, 63, 37, 15, 51, 931, 1131, 3503, 2737]),
    (13, 611, &[1, 3, 7, 13, 3, 23, 41, 127, 255, 961, 595, 2139, 4177]),
    (13, 613, &[1, 3, 1, 13, 15, 27, 121, 249, 457, 695, 1051, 1713, 367]),
    (13, 625, &[1, 1, 7, 5, 31, 57, 61, 3, 303, 621, 779, 933, 6801]),
    (13, 644, &[1, 1, 1, 13, 25, 29, 83, 169, 387, 981, 1259, 2571, 793]),
    (13, 651, &[1, 1, 7, 5, 9, 25, 105, 199, 385, 707, 177, 1953, 5089]),
    (13, 654, &[1, 3, 5, 9, 19, 55, 119, 113, 217, 789, 1077, 2719, 4563]),
    (13, 656, &[1, 3, 7, 13, 1, 61, 101, 235, 23, 691, 645, 3621, 2959]),
    (13, 662, &[1, 1, 3, 5, 11, 43, 45, 167, 389, 681, 1865, 4021, 897]),
    (13, 668, &[1, 1, 1, 15, 3, 63, 91, 159, 287, 793, 1303, 3523, 5353]),
    (13, 681, &[1, 1, 7, 9, 31, 61, 41, 67, 435, 357, 1593, 2943, 5575]),
    (13, 682, &[1, 1, 1, 3, 21, 53, 125, 123, 449, 347, 943, 2739, 5133]),
    (13, 689, &[1, 1, 3, 11, 17, 61, 33, 251, 33, 991, 1397, 2793, 6531]),
    (13, 696, &[1, 3, 1, 9, 11, 7, 75, 87, 129, 991, 439, 3083, 5231]),
    (13, 699, &[1, 3, 7, 13, 3, 43, 49, 7, 331, 647, 807, 545, 7857]),
    (13, 707, &[1, 3, 7, 15, 15, 45, 97, 255, 87, 287, 973, 609, 3645]),
    (13, 709, &[1, 3, 7, 5, 5, 61, 37, 13, 1, 369, 793, 2411, 1995]),
    (13, 714, &[1, 3, 3, 1, 1, 49, 71, 229, 379, 851, 1209, 1479, 3465]),
    (13, 716, &[1, 3, 5, 13, 5, 49, 35, 77, 21, 215, 779, 389, 7055]),
    (13, 719, &[1, 1, 1, 1, 25, 1, 119, 231, 161, 575, 853, 1177, 2381]),
    (13, 727, &[1, 1, 1, 3, 11, 5, 99, 183, 489, 89, 273, 1373, 3747]),
    (13, 734, &[1, 1, 7, 5, 11, 45, 33, 129, 457, 707, 1583, 2043, 3447]),
    (13, 738, &[1, 1, 7, 7, 27, 35, 105, 81, 293, 811, 1395, 2479, 7515]),
    (13, 743, &[1, 1, 5, 15, 11, 19, 17, 59, 29, 361, 1123, 1025, 6953]),
    (13, 747, &[1, 1, 5, 7, 23, 7, 29, 63, 51, 49, 1425, 3289, 2899]),
    (13, 757, &[1, 1, 3, 7, 17, 25, 67, 231, 15, 913, 1731, 1183, 1983]),
    (13, 769, &[1, 1, 3, 1, 5, 23, 113, 185, 433, 959, 1299, 473, 809]),
    (13, 770, &[1, 1, 7, 1, 5, 55, 7, 125, 185, 603, 475, 1025, 4497]),
    (13, 776, &[1, 3, 3, 9, 29, 61, 95, 91, 433, 137, 1001, 511, 2313]),
    (13, 790, &[1, 3, 7, 7, 13, 21, 7, 19, 291, 983, 83, 2885, 6617]),
    (13, 799, &[1, 1, 3, 9, 15, 63, 121, 173, 443, 525, 2021, 2997, 1919]),
    (13, 805, &[1, 3, 3, 11, 13, 3, 69, 55, 81, 959, 593, 589, 741]),
    (13, 809, &[1, 3, 1, 13, 19, 19, 25, 183, 157, 965, 1737, 2965, 251]),
    (13, 812, &[1, 3, 5, 9, 1, 63, 125, 193, 319, 509, 1199, 3929, 7753]),
    (13, 820, &[1, 1, 1, 5, 1, 49, 13, 117, 467, 145, 721, 2963, 3425]),
    (13, 827, &[1, 1, 1, 11, 3, 53, 105, 87, 115, 433, 1895, 1867, 5183]),
    (13, 829, &[1, 1, 5, 1, 9, 63, 103, 79, 361, 735, 989, 789, 6109]),
    (13, 835, &[1, 1, 5, 13, 7, 49, 71, 221, 239, 679, 1049, 1631, 1555]),
    (13, 841, &[1, 3, 3, 3, 15, 5, 65, 21, 345, 455, 1009, 3751, 6541]),
    (13, 844, &[1, 1, 1, 11, 11, 31, 53, 253, 211, 437, 1949, 669, 2583]),
    (13, 856, &[1, 1, 1, 11, 1, 49, 51, 39, 143, 197, 1227, 3249, 1593]),
    (13, 859, &[1, 1, 5, 13, 11, 27, 21, 69, 13, 843, 839, 1009, 7949]),
    (13, 862, &[1, 3, 3, 9, 9, 21, 99, 253, 427, 13, 1439, 349, 6931]),
    (13, 865, &[1, 1, 7, 5, 13, 45, 109, 25, 361, 209, 549, 2531, 1395]),
    (13, 885, &[1, 3, 7, 15, 27, 37, 77, 191, 401, 197, 961, 161, 3481]),
    (13, 890, &[1, 1, 1, 11, 7, 63, 77, 125, 69, 217, 801, 4049, 2917]),
    (13, 905, &[1, 3, 5, 1, 15, 15, 69, 109, 427, 537, 1549, 2403, 2659]),
    (13, 916, &[1, 1, 7, 5, 21, 7, 125, 195, 111, 33, 293, 2619, 7527]),
    (13, 925, &[1, 1, 3, 7, 29, 7, 109, 45, 219, 69, 1449, 2923, 713]),
    (13, 935, &[1, 1, 7, 11, 5, 53, 57, 199, 375, 235, 391, 3333, 2037]),
    (13, 939, &[1, 1, 3, 15, 9, 9, 103, 231, 449, 827, 1983, 3599, 7449]),
    (13, 942, &[1, 1, 1, 7, 7, 63, 31, 223, 387, 413, 1147, 1343, 5165]),
    (13, 949, &[1, 3, 5, 7, 3, 61, 45, 67, 117, 511, 625, 1937, 5239]),
    (13, 953, &[1, 1, 1, 13, 17, 17, 67, 81, 329, 789, 1295, 4047, 3635]),
    (13, 956, &[1, 1, 5, 15, 23, 47, 93, 237, 367, 389, 1851, 3535, 3675]),
    (13, 961, &[1, 3, 5, 11, 13, 29, 37, 125, 13, 773, 223, 3407, 7727]),
    (13, 968, &[1, 1, 7, 15, 19, 23, 55, 13, 11, 3, 65, 2769, 6711]),
    (13, 976, &[1, 3, 7, 1, 15, 5, 103, 9, 157, 533, 1395, 99, 2083]),
    (13, 988, &[1, 3, 3, 7, 29, 3, 87, 123, 349, 331, 267, 1405, 47]),
    (13, 995, &[1, 3, 5, 11, 3, 37, 17, 65, 385, 713, 1701, 2943, 2487]),
    (13, 997, &[1, 3, 3, 13, 31, 51, 59, 217, 141, 825, 763, 63, 995]),
    (13, 1007, &[1, 3, 3, 1, 29, 31, 107, 161, 373, 15, 1397, 1097, 6609]),
    (13, 1015, &[1, 1, 3, 13, 1, 23, 111, 59, 433, 307, 1121, 2733, 7299]),
    (13, 1016, &[1, 3, 1, 3, 9, 1, 27, 23, 149, 545, 735, 1039, 1913]),
    (13, 1027, &[1, 1, 1, 15, 13, 7, 25, 235, 311, 499, 13, 3289, 371]),
    (13, 1036, &[1, 1, 5, 7, 5, 17, 89, 153, 209, 681, 573, 2141, 1859]),
    (13, 1039, &[1, 3, 7, 5, 3, 25, 61, 7, 109, 477, 1977, 2881, 1801]),
    (13, 1041, &[1, 3, 1, 13, 5, 11, 91, 11, 139, 803, 433, 1065, 1831]),
    (13, 1048, &[1, 1, 1, 13, 17, 51, 115, 13, 333, 563, 1235, 2077, 59]),
    (13, 1053, &[1, 1, 1, 11, 15, 11, 23, 25, 115, 79, 147, 4049, 4097]),
    (13, 1054, &[1, 3, 7, 5, 23, 31, 119, 245, 433, 523, 1201, 3909, 1855]),
    (13, 1058, &[1, 1, 5, 3, 25, 35, 105, 135, 149, 723, 1257, 525, 4889]),
    (13, 1075, &[1, 1, 7, 7, 21, 23, 63, 43, 497, 497, 457, 715, 3085]),
    (13, 1082, &[1, 3, 1, 9, 21, 5, 15, 123, 473, 243, 1249, 1309, 3411]),
    (13, 1090, &[1, 1, 7, 5, 21, 45, 81, 237, 419, 769, 1819, 2195, 4563]),
    (13, 1109, &[1, 1, 5, 5, 11, 9, 119, 73, 503, 753, 465, 1947, 3417]),
    (13, 1110, &[1, 3, 7, 5, 21, 3, 73, 229, 325, 353, 961, 1321, 3737]),
    (13, 1119, &[1, 3, 1, 15, 29, 33, 115, 21, 55, 805, 609, 2895, 5253]),
    (13, 1126, &[1, 3, 1, 1, 5, 33, 27, 115, 81, 441, 1143, 2695, 3365]),
    (13, 1130, &[1, 3, 3, 13, 7, 39, 5, 115, 261, 437, 1921, 1283, 7489]),
    (13, 1135, &[1, 3, 1, 9, 31, 11, 3, 19, 307, 129, 165, 1179, 3695]),
    (13, 1137, &[1, 3, 7, 9, 1, 39, 57, 229, 265, 959, 1553, 1223, 2869]),
    (13, 1140, &[1, 1, 5, 11, 11, 59, 111, 111, 363, 27, 1375, 3125, 4439]),
    (13, 1149, &[1, 3, 3, 1, 25, 37, 21, 153, 381, 303, 167, 1313, 4001]),
    (13, 1156, &[1, 3, 3, 13, 15, 7, 17, 77, 361, 125, 977, 863, 6343]),
    (13, 1159, &[1, 3, 3, 3, 11, 21, 87, 101, 379, 629, 1409, 4007, 4317]),
    (13, 1160, &[1, 3, 1, 13, 29, 21, 41, 123, 325, 155, 1247, 797, 691]),
    (13, 1165, &[1, 1, 1, 9, 31, 17, 101, 223, 165, 659, 1805, 1709, 7175]),
    (13, 1173, &[1, 3, 5, 5, 1, 49, 115, 73, 181, 739, 487, 1789, 6217]),
    (13, 1178, &[1, 3, 1, 9, 17, 17, 9, 101, 15, 905, 1007, 1273, 2299]),
    (13, 1183, &[1, 3, 1, 11, 17, 37, 99, 41, 171, 757, 1119, 721, 7073]),
    (13, 1184, &[1, 1, 5, 3, 7, 45, 33, 247, 405, 981, 1221, 707, 2321]),
    (13, 1189, &[1, 3, 5, 1, 19, 45, 125, 237, 255, 781, 1939, 3189, 7477]),
    (13, 1194, &[1, 3, 7, 9, 9, 19, 121, 191, 457, 993, 1517, 801, 143]),
    (13, 1211, &[1, 3, 3, 11, 23, 61, 87, 9, 381, 539, 931, 597, 4879]),
    (13, 1214, &[1, 1, 3, 9, 5, 35, 17, 121, 299, 899, 27, 3895, 2181]),
    (13, 1216, &[1, 3, 5, 1, 1, 17, 101, 93, 7, 391, 79, 2019, 6747]),
    (13, 1225, &[1, 1, 7, 7, 31, 13, 87, 151, 483, 247, 427, 3657, 6011]),
    (13, 1231, &[1, 1, 5, 5, 13, 7, 23, 43, 455, 317, 1719, 1097, 409]),
    (13, 1239, &[1, 1, 1, 1, 21, 39, 97, 153, 47, 693, 1461, 1431, 7877]),
    (13, 1243, &[1, 3, 3, 7, 3, 35, 73, 161, 121, 147, 1423, 3601, 2819]),
    (13, 1246, &[1, 3, 1, 9, 15, 39, 55, 43, 419, 753, 1873, 837, 6031]),
    (13, 1249, &[1, 3, 3, 3, 1, 43, 125, 239, 477, 519, 1281, 3273, 2915]),
    (13, 1259, &[1, 3, 3, 13, 27, 59, 113, 191, 175, 91, 31, 1797, 1261]),
    (13, 1273, &[1, 3, 7, 11, 29, 27, 43, 249, 291, 79, 79, 533, 5727]),
    (13, 1274, &[1, 3, 3, 7, 9, 15, 61, 215, 365, 55, 999, 65, 3867]),
    (13, 1281, &[1, 1, 1, 11, 3, 23, 107, 125, 307, 165, 639, 2147, 1673]),
    (13, 1287, &[1, 1, 7, 11, 23, 43, 67, 147, 385, 231, 917, 1503, 4225]),
    (13, 1294, &[1, 3, 1, 9, 27, 25, 49, 253, 371, 349, 1669, 2181, 3263]),
    (13, 1296, &[1, 1, 1, 9, 15, 3, 5, 65, 219, 733, 175, 1801, 1557]),
    (13, 1305, &[1, 3, 3, 1, 5, 35, 17, 151, 201, 51, 1057, 1625, 1673]),
    (13, 1306, &[1, 3, 7, 11, 17, 31, 101, 245, 135, 259, 613, 1427, 4773]),
    (13, 1318, &[1, 3, 7, 3, 13, 61, 103, 213, 259, 681, 253, 497, 8007]),
    (13, 1332, &[1, 1, 5, 9, 21, 43, 31, 43, 101, 21, 803, 487, 7037]),
    (13, 1335, &[1, 1, 5, 13, 23, 9, 87, 49, 157, 245, 895, 3859, 6909]),
    (13, 1336, &[1, 1, 7, 1, 11, 11, 123, 181, 197, 419, 1307, 2865, 1211]),
    (13, 1341, &[1, 1, 5, 7, 9, 7, 87, 105, 369, 705, 1191, 2643, 923]),
    (13, 1342, &[1, 1, 1, 11, 23, 45, 17, 31, 339, 39, 1887, 3465, 5939]),
    (13, 1362, &[1, 1, 7, 9, 1, 13, 103, 243, 153, 663, 1745, 1595, 2031]),
    (13, 1364, &[1, 1, 5, 9, 5, 31, 45, 155, 345, 677, 637, 1731, 727]),
    (13, 1368, &[1, 3, 3, 15, 19, 33, 15, 173, 373, 359, 535, 1269, 6379]),
    (13, 1378, &[1, 3, 3, 3, 13, 21, 69, 81, 343, 185, 1221, 449, 6661]),
    (13, 1387, &[1, 3, 7, 1, 31, 59, 25, 53, 455, 485, 1419, 2833, 4867]),
    (13, 1389, &[1, 1, 5, 5, 15, 17, 79, 109, 295, 543, 1591, 1059, 3471]),
    (13, 1397, &[1, 1, 7, 13, 23, 31, 103, 143, 417, 243, 535, 1529, 1317]),
    (13, 1401, &[1, 1, 7, 1, 29, 23, 61, 209, 187, 425, 1323, 251, 4871]),
    (13, 1408, &[1, 3, 7, 5, 15, 11, 107, 73, 411, 851, 1671, 817, 5757]),
    (13, 1418, &[1, 3, 7, 5, 3, 7, 113, 189, 447, 19, 1817, 3325, 2129]),
    (13, 1425, &[1, 1, 1, 1, 13, 47, 61, 177, 431, 311, 1135, 1939, 2271]),
    (13, 1426, &[1, 1, 5, 11, 11, 31, 29, 7, 339, 543, 1535, 3447, 1717]),
    (13, 1431, &[1, 1, 7, 13, 1, 53, 95, 13, 23, 635, 635, 3121, 4433]),
    (13, 1435, &[1, 3, 7, 1, 7, 47, 47, 77, 93, 385, 825, 3661, 7151]),
    (13, 1441, &[1, 1, 5, 7, 3, 19, 25, 99, 465, 729, 635, 3937, 5403]),
    (13, 1444, &[1, 1, 5, 13, 1, 23, 105, 17, 421, 743, 1625, 2763, 745]),
    (13, 1462, &[1, 1, 7, 15, 7, 29, 37, 33, 195, 781, 1467, 1841, 1593]),
    (13, 1471, &[1, 3, 1, 15, 1, 3, 81, 179, 371, 219, 1883, 2551, 6011]),
    (13, 1474, &[1, 3, 7, 11, 21, 35, 49, 101, 219, 535, 1663, 3449, 2071]),
    (13, 1483, &[1, 3, 7, 13, 7, 3, 105, 79, 261, 127, 1655, 3981, 3629]),
    (13, 1485, &[1, 3, 7, 5, 13, 3, 43, 221, 193, 971, 683, 2483, 1681]),
    (13, 1494, &[1, 3, 7, 11, 31, 43, 81, 143, 407, 827, 1889, 2959, 7579]),
    (13, 1497, &[1, 3, 3, 1, 3, 31, 101, 89, 283, 785, 823, 507, 2577]),
    (13, 1516, &[1, 1, 7, 7, 7, 37, 123, 25, 285, 143, 989, 3713, 7293]),
    (13, 1522, &[1, 1, 5, 9, 3, 19, 51, 91, 185, 551, 1517, 2951, 3421]),
    (13, 1534, &[1, 3, 7, 9, 3, 49, 63, 25, 303, 475, 601, 3141, 4383]),
    (13, 1543, &[1, 3, 1, 1, 21, 23, 53, 157, 353, 769, 1055, 613, 2999]),
    (13, 1552, &[1, 3, 7, 7, 17, 27, 31, 247, 317, 941, 817, 1993, 2963]),
    (13, 1557, &[1, 3, 7, 5, 5, 29, 31, 9, 169, 301, 1699, 333, 6845]),
    (13, 1558, &[1, 3, 5, 11, 7, 23, 25, 207, 499, 583, 1365, 3129, 2333]),
    (13, 1567, &[1, 3, 5, 7, 13, 13, 33, 121, 77, 113, 691, 1257, 3651]),
    (13, 1568, &[1, 3, 7, 5, 25, 23, 107, 149, 511, 497, 1259, 303, 7535]),
    (13, 1574, &[1, 3, 1, 15, 5, 47, 65, 237, 377, 335, 1223, 339, 1837]),
    (13, 1592, &[1, 1, 7, 13, 7, 13, 29, 83, 363, 675, 937, 3569, 7783]),
    (13, 1605, &[1, 3, 3, 5, 23, 33, 27, 175, 301, 271, 1899, 1181, 7057]),
    (13, 1606, &[1, 1, 5, 1, 23, 15, 79, 227, 261, 61, 1231, 1181, 2419]),
    (13, 1610, &[1, 3, 1, 13, 21, 15, 103, 221, 99, 205, 571, 2477, 4269]),
    (13, 1617, &[1, 1, 7, 7, 9, 47, 101, 133, 313, 273, 43, 575, 1101]),
    (13, 1623, &[1, 1, 5, 11, 31, 61, 13, 103, 453, 77, 117, 487, 4761]),
    (13, 1630, &[1, 3, 1, 13, 29, 5, 31, 197, 141, 855, 1295, 3049, 7131]),
    (13, 1634, &[1, 1, 7, 7, 21, 5, 37, 105, 9, 717, 763, 1997, 2117]),
    (13, 1640, &[1, 3, 1, 5, 11, 29, 63, 225, 509, 981, 133, 2577, 3801]),
    (13, 1643, &[1, 1, 5, 1, 25, 17, 21, 21, 411, 937, 307, 3141, 2691]),
    (13, 1648, &[1, 1, 1, 7, 29, 1, 55, 211, 383, 179, 939, 329, 7451]),
    (13, 1651, &[1, 3, 1, 7, 25, 39, 13, 143, 341, 215, 1301, 1863, 6399]),
    (13, 1653, &[1, 1, 7, 11, 19, 41, 13, 111, 469, 65, 1777, 535, 7115]),
    (13, 1670, &[1, 1, 1, 7, 27, 31, 83, 17, 433, 191, 1443, 617, 1067]),
    (13, 1676, &[1, 3, 1, 1, 7, 41, 9, 21, 233, 141, 1563, 1285, 4807]),
    (13, 1684, &[1, 1, 1, 15, 29, 53, 91, 169, 213, 967, 1487, 2755, 7427]),
    (13, 1687, &[1, 3, 5, 7, 29, 27, 77, 103, 81, 193, 1071, 509, 313]),
    (13, 1691, &[1, 3, 3, 5, 3, 51, 127, 187, 373, 641, 1479, 1971, 3669]),
    (13, 1693, &[1, 1, 3, 15, 15, 43, 105, 37, 191, 471, 985, 2913, 2323]),
    (13, 1698, &[1, 1, 3, 11, 15, 1, 89, 129, 225, 171, 1843, 3635, 2225]),
    (13, 1709, &[1, 1, 7, 1, 21, 31, 13, 17, 423, 413, 1441, 1253, 781]),
    (13, 1715, &[1, 1, 7, 5, 29, 29, 87, 7, 383, 593, 113, 3827, 1777]),
    (13, 1722, &[1, 3, 5, 5, 17, 23, 49, 255, 363, 787, 1363, 1827, 7939]),
    (13, 1732, &[1, 3, 3, 5, 31, 45, 43, 139, 345, 393, 271, 3381, 1141]),
    (13, 1735, &[1, 1, 5, 15, 15, 37, 101, 39, 241, 621, 571, 1875, 2379]),
    (13, 1747, &[1, 1, 5, 5, 19, 15, 45, 39, 349, 347, 2011, 855, 5553]),
    (13, 1749, &[1, 1, 7, 3, 21, 51, 71, 231, 207, 567, 903, 1153, 2491]),
    (13, 1754, &[1, 1, 1, 3, 9, 39, 31, 5, 121, 1011, 1335, 3829, 5785]),
    (13, 1777, &[1, 3, 7, 1, 21, 45, 3, 253, 121, 783, 85, 4005, 5117]),
    (13, 1784, &[1, 1, 3, 11, 27, 5, 19, 255, 151, 973, 1073, 1491, 2165]),
    (13, 1790, &[1, 1, 1, 1, 9, 63, 103, 195, 383, 559, 1497, 2905, 127]),
    (13, 1795, &[1, 1, 1, 1, 15, 31, 39, 41, 353, 245, 1393, 1855, 2647]),
    (13, 1801, &[1, 1, 1, 3, 3, 45, 115, 155, 53, 531, 1811, 2631, 4545]),
    (13, 1802, &[1, 1, 7, 7, 3, 1, 33, 167, 491, 649, 589, 3823, 2487]),
    (13, 1812, &[1, 3, 3, 3, 19, 19, 29, 25, 251, 823, 81, 1735, 1623]),
    (13, 1828, &[1, 3, 1, 9, 9, 45, 91, 191, 423, 129, 203, 575, 3195]),
    (13, 1831, &[1, 3, 3, 7, 13, 37, 81, 253, 127, 125, 1273, 1731, 3837]),
    (13, 1837, &[1, 1, 1, 13, 15, 63, 91, 163, 73, 833, 715, 3483, 27]),
    (13, 1838, &[1, 1, 5, 11, 9, 43, 107, 177, 405, 789, 1141, 321, 1115]),
    (13, 1840, &[1, 3, 1, 9, 29, 27, 113, 213, 103, 699, 1241, 1059, 7619]),
    (13, 1845, &[1, 3, 1, 3, 9, 57, 99, 21, 263, 899, 993, 1001, 5235]),
    (13, 1863, &[1, 1, 1, 9, 27, 41, 67, 207, 295, 549, 1427, 1171, 2679]),
    (13, 1864, &[1, 1, 1, 1, 23, 41, 83, 35, 279, 757, 375, 1233, 6669]),
    (13, 1867, &[1, 3, 3, 15, 3, 37, 83, 11, 431, 961, 1711, 2357, 3719]),
    (13, 1870, &[1, 1, 5, 11, 21, 35, 3, 245, 261, 689, 1339, 2745, 7781]),
    (13, 1877, &[1, 1, 5, 5, 1, 37, 93, 1, 287, 419, 1555, 2611, 295]),
    (13, 1881, &[1, 1, 1, 5, 19, 15, 111, 229, 153, 185, 1589, 1969, 4217]),
    (13, 1884, &[1, 1, 3, 11, 23, 23, 109, 191, 253, 151, 393, 1743, 7729]),
    (13, 1903, &[1, 1, 1, 13, 31, 1, 73, 229, 171, 79, 1983, 3017, 1979]),
    (13, 1917, &[1, 1, 7, 1, 29, 45, 7, 117, 503, 835, 723, 2113, 1965]),
    (13, 1918, &[1, 3, 7, 9, 1, 63, 81, 159, 305, 429, 1511, 2715, 5285]),
    (13, 1922, &[1, 3, 1, 3, 29, 7, 63, 55, 143, 203, 669, 3203, 3279]),
    (13, 1924, &[1, 3, 3, 11, 13, 15, 45, 227, 111, 975, 909, 1105, 2887]),
    (13, 1928, &[1, 3, 3, 3, 17, 37, 5, 169, 147, 773, 87, 1683, 921]),
    (13, 1931, &[1, 1, 1, 15, 15, 5, 63, 239, 103, 317, 765, 3633, 4245]),
    (13, 1951, &[1, 1, 5, 7, 23, 49, 47, 179, 227, 259, 1691, 4061, 2875]),
    (13, 1952, &[1, 1, 1, 5, 1, 5, 81, 119, 291, 859, 1139, 1009, 5919]),
    (13, 1957, &[1, 1, 3, 7, 29, 37, 13, 5, 475, 59, 1289, 4063, 3641]),
    (13, 1958, &[1, 3, 7, 5, 27, 31, 1, 123, 421, 1007, 1653, 3599, 603]),
    (13, 1964, &[1, 1, 7, 15, 7, 23, 59, 19, 93, 475, 131, 2837, 9]),
    (13, 1967, &[1, 1, 1, 9, 11, 25, 43, 89, 259, 509, 1489, 2473, 187]),
    (13, 1970, &[1, 3, 7, 11, 25, 41, 101, 173, 41, 655, 1311, 1777, 499]),
    (13, 1972, &[1, 1, 5, 9, 3, 35, 37, 241, 325, 343, 1557, 3481, 5307]),
    (13, 1994, &[1, 3, 7, 9, 19, 45, 113, 5, 429, 141, 251, 1897, 5023]),
    (13, 2002, &[1, 3, 5, 3, 11, 37, 83, 147, 505, 343, 151, 2965, 6319]),
    (13, 2007, &[1, 1, 5, 5, 31, 45, 127, 175, 59, 275, 963, 3669, 767]),
    (13, 2008, &[1, 1, 5, 7, 9, 51, 69, 183, 111, 811, 541, 325, 1355]),
    (13, 2023, &[1, 1, 5, 15, 19, 45, 107, 95, 235, 569, 33, 3093, 2895]),
    (13, 2030, &[1, 1, 3, 11, 25, 39, 111, 127, 431, 735, 893, 2271, 7705]),
    (13, 2035, &[1, 3, 7, 3, 17, 41, 21, 19, 297, 319, 121, 1331, 7641]),
    (13, 2038, &[1, 3, 7, 9, 15, 9, 1, 171, 59, 199, 1385, 883, 3201]),
    (13, 2042, &[1, 3, 7, 7, 5, 19, 79, 235, 451, 335, 487, 3463, 803]),
    (13, 2047, &[1, 3, 7, 7, 9, 11, 1, 21, 461, 1023, 253, 165, 6225]),
    (13, 2051, &[1, 1, 1, 13, 5, 37, 33, 141, 23, 905, 1677, 3623, 4281]),
    (13, 2058, &[1, 1, 5, 5, 23, 25, 29, 189, 175, 23, 1033, 2909, 1593]),
    (13, 2060, &[1, 1, 7, 9, 3, 11, 93, 147, 61, 65, 387, 2757, 2089]),
    (13, 2071, &[1, 3, 1, 5, 7, 3, 83, 125, 361, 19, 603, 3125, 4669]),
    (13, 2084, &[1, 3, 1, 3, 7, 21, 119, 155, 357, 721, 1221, 2445, 3839]),
    (13, 2087, &[1, 1, 5, 5, 25, 27, 13, 27, 105, 737, 1999, 39, 6265]),
    (13, 2099, &[1, 1, 5, 7, 13, 53, 99, 151, 209, 87, 2025, 3941, 1487]),
    (13, 2108, &[1, 3, 5, 13, 1, 45, 85, 239, 83, 979, 1643, 3247, 7995]),
    (13, 2111, &[1, 1, 1, 15, 5, 15, 31, 241, 213, 679, 797, 3027, 5273]),
    (13, 2120, &[1, 1, 1, 13, 5, 53, 59, 121, 407, 123, 1527, 965, 5529]),
    (13, 2128, &[1, 1, 1, 9, 1, 13, 79, 211, 11, 123, 73, 1877, 7555]),
    (13, 2138, &[1, 3, 7, 1, 5, 3, 25, 45, 119, 43, 183, 1035, 7107]),
    (13, 2143, &[1, 1, 5, 15, 7, 51, 119, 39, 341, 355, 301, 1501, 5299]),
    (13, 2144, &[1, 3, 3, 11, 9, 37, 11, 245, 249, 843, 2037, 1963, 7863]),
    (13, 2153, &[1, 1, 3, 7, 17, 33, 41, 237, 321, 239, 861, 469, 6023]),
    (13, 2156, &[1, 3, 1, 13, 3, 47, 61, 107, 265, 91, 1271, 3233, 1189]),
    (13, 2162, &[1, 3, 1, 7, 15, 37, 55, 199, 255, 577, 1849, 21, 6523]),
    (13, 2167, &[1, 1, 5, 9, 7, 47, 83, 85, 107, 89, 969, 1453, 3213]),
    (13, 2178, &[1, 3, 1, 15, 13, 57, 73, 103, 121, 559, 1783, 2065, 3295]),
    (13, 2183, &[1, 1, 7, 3, 29, 7, 3, 159, 437, 381, 41, 2999, 4935]),
    (13, 2202, &[1, 3, 3, 9, 19, 33, 11, 105, 511, 183, 679, 2715, 557]),
    (13, 2211, &[1, 3, 3, 13, 23, 57, 65, 69, 135, 927, 477, 1429, 1191]),
    (13, 2214, &[1, 1, 7, 9, 1, 59, 99, 15, 357, 293, 993, 3701, 4999]),
    (13, 2223, &[1, 1, 1, 9, 23, 55, 37, 87, 115, 117, 823, 2797, 4609]),
    (13, 2225, &[1, 1, 1, 13, 7, 21, 27, 247, 505, 749, 1277, 2351, 4073]),
    (13, 2232, &[1, 3, 3, 1, 15, 33, 51, 39, 133, 111, 1717, 2657, 5743]),
    (13, 2237, &[1, 1, 7, 15, 3, 15, 89, 117, 285, 905, 1461, 1227, 561]),
    (13, 2257, &[1, 1, 1, 3, 3, 19, 7, 77, 289, 691, 1871, 3555, 2453]),
    (13, 2260, &[1, 3, 1, 11, 9, 43, 63, 175, 203, 919, 779, 1697, 2001]),
    (13, 2267, &[1, 3, 1, 15, 19, 63, 77, 255, 99, 967, 247, 2273, 4461]),
    (13, 2274, &[1, 3, 1, 1, 31, 15, 59, 241, 61, 519, 525, 285, 6961]),
    (13, 2276, &[1, 3, 5, 5, 15, 47, 63, 149, 427, 671, 981, 2845, 6153]),
    (13, 2285, &[1, 1, 7, 11, 19, 41, 111, 107, 95, 287, 1357, 2443, 527]),
    (13, 2288, &[1, 1, 1, 11, 7, 11, 111, 219, 213, 111, 985, 883, 1353]),
    (13, 2293, &[1, 1, 3, 5, 3, 23, 59, 123, 239, 235, 537, 2851, 7815]),
    (13, 2294, &[1, 3, 7, 15, 17, 15, 73, 119, 461, 567, 75, 1723, 849]),
    (13, 2297, &[1, 3, 5, 7, 25, 39, 11, 71, 415, 307, 965, 2849, 1715]),
    (13, 2303, &[1, 1, 7, 13, 29, 61, 43, 215, 397, 725, 1915, 3087, 8051]),
    (13, 2308, &[1, 3, 3, 7, 21, 1, 9, 201, 247, 607, 367, 3097, 1487]),
    (13, 2311, &[1, 3, 1, 13, 27, 61, 89, 55, 257, 519, 1169, 1037, 4455]),
    (13, 2318, &[1, 1, 7, 1, 7, 61, 7, 187, 203, 993, 1857, 845, 2785]),
    (13, 2323, &[1, 1, 1, 7, 25, 49, 7, 249, 417, 497, 995, 567, 757]),
    (13, 2332, &[1, 1, 7, 13, 13, 29, 103, 157, 235, 437, 239, 1635, 8145]),
    (13, 2341, &[1, 1, 7, 1, 27, 17, 51, 137, 237, 129, 1125, 2341, 4901]),
    (13, 2345, &[1, 1, 5, 13, 1, 63, 33, 33, 347, 319, 1009, 1709, 5073]),
    (13, 2348, &[1, 1, 3, 9, 9, 5, 97, 129, 469, 195, 1993, 3195, 2605]),
    (13, 2354, &[1, 1, 5, 13, 15, 7, 99, 207, 339, 53, 1487, 1353, 6061]),
    (13, 2368, &[1, 1, 3, 1, 31, 3, 89, 75, 159, 113, 1423, 3499, 6275]),
    (13, 2377, &[1, 3, 1, 7, 25, 15, 91, 201, 71, 867, 1783, 3143, 5757]),
    (13, 2380, &[1, 1, 1, 5, 1, 31, 33, 93, 353, 1005, 1911, 1689, 5329]),
    (13, 2383, &[1, 3, 7, 1, 31, 53, 95, 53, 431, 629, 765, 2969, 1531]),
    (13, 2388, &[1, 3, 3, 11, 21, 37, 113, 73, 5, 29, 1413, 2751, 4523]),
    (13, 2395, &[1, 3, 3, 7, 15, 23, 29, 235, 421, 191, 865, 2653, 2275]),
    (13, 2397, &[1, 3, 1, 11, 3, 19, 117, 229, 305, 309, 297, 3111, 7355]),
    (13, 2401, &[1, 3, 7, 13, 7, 61, 121, 231, 139, 365, 1941, 2987, 8143]),
    (13, 2411, &[1, 3, 1, 5, 9, 63, 17, 53, 313, 775, 951, 1693, 6885]),
    (13, 2413, &[1, 1, 5, 11, 17, 9, 101, 243, 221, 67, 631, 2841, 3357]),
    (13, 2419, &[1, 3, 7, 3, 11, 39, 17, 129, 55, 941, 2037, 971, 3473]),
    (13, 2435, &[1, 3, 7, 15, 31, 61, 125, 3, 293, 211, 235, 2625, 2415]),
    (13, 2442, &[1, 3, 3, 9, 19, 11, 13, 33, 373, 285, 1799, 1895, 2715]),
    (13, 2455, &[1, 1, 5, 15, 19, 11, 99, 191, 181, 631, 821, 1427, 1931]),
    (13, 2472, &[1, 1, 3, 3, 19, 11, 101, 221, 27, 105, 927, 2743, 2929]),
    (13, 2478, &[1, 3, 7, 7, 21, 7, 99, 161, 497, 941, 953, 3537, 6175]),
    (13, 2490, &[1, 3, 5, 11, 29, 27, 115, 169, 305, 45, 1921, 645, 5939]),
    (13, 2507, &[1, 3, 3, 15, 25, 45, 87, 235, 293, 151, 449, 2577, 3715]),
    (13, 2509, &[1, 3, 7, 1, 29, 17, 77, 179, 477, 371, 259, 3395, 2073]),
    (13, 2517, &[1, 3, 1, 13, 21, 11, 99, 203, 269, 353, 603, 1471, 5689]),
    (13, 2524, &[1, 3, 1, 5, 9, 31, 37, 111, 489, 403, 1347, 1177, 6105]),
    (13, 2528, &[1, 3, 7, 3, 27, 55, 21, 205, 141, 1005, 555, 2077, 3143]),
    (13, 2531, &[1, 3, 3, 5, 7, 59, 75, 223, 205, 7, 1481, 653, 5879]),
    (13, 2538, &[1, 3, 3, 15, 15, 45, 107, 181, 91, 405, 865, 649, 4837]),
    (13, 2545, &[1, 1, 7, 11, 29, 21, 25, 7, 71, 247, 503, 3593, 3]),
    (13, 2546, &[1, 1, 3, 13, 1, 31, 25, 113, 401, 805, 1485, 1753, 7893]),
    (13, 2555, &[1, 3, 7, 13, 27, 29, 43, 81, 191, 171, 285, 1471, 1297]),
    (13, 2557, &[1, 3, 1, 11, 1, 13, 37, 143, 307, 721, 465, 3121, 121]),
    (13, 2564, &[1, 3, 7, 13, 1, 15, 75, 43, 323, 949, 1207, 415, 6493]),
    (13, 2573, &[1, 1, 7, 3, 27, 35, 35, 227, 465, 861, 967, 1849, 2169]),
    (13, 2579, &[1, 1, 5, 1, 25, 15, 29, 103, 511, 119, 1671, 3117, 1607]),
    (13, 2592, &[1, 1, 5, 5, 13, 25, 103, 9, 63, 359, 169, 3325, 3323]),
    (13, 2598, &[1, 3, 7, 3, 7, 55, 89, 71, 449, 667, 1515, 177, 1685]),
    (13, 2607, &[1, 3, 1, 1, 13, 1, 101, 95, 425, 691, 397, 1509, 1471]),
    (13, 2612, &[1, 1, 7, 11, 19, 41, 51, 109, 461, 565, 1953, 1963, 4685]),
    (13, 2619, &[1, 3, 3, 9, 13, 23, 67, 223, 1, 469, 229, 3431, 5683]),
    (13, 2621, &[1, 3, 1, 13, 31, 45, 39, 53, 299, 221, 1421, 1005, 967]),
    (13, 2627, &[1, 3, 1, 1, 1, 41, 105, 163, 189, 247, 1143, 3627, 4835]),
    (13, 2633, &[1, 3, 3, 7, 5, 13, 93, 121, 71, 1001, 589, 2895, 2147]),
    (13, 2636, &[1, 3, 7, 9, 31, 15, 89, 39, 127, 339, 977, 2347, 195]),
    (13, 2642, &[1, 3, 5, 11, 7, 59, 111, 195, 413, 841, 1479, 13, 7233]),
    (13, 2654, &[1, 3, 3, 13, 25, 37, 119, 143, 175, 857, 1541, 1561, 3361]),
    (13, 2660, &[1, 1, 3, 5, 11, 25, 49, 5, 489, 531, 1803, 3777, 8047]),
    (13, 2669, &[1, 1, 3, 7, 29, 43, 107, 93, 59, 85, 895, 3207, 2043]),
    (13, 2675, &[1, 1, 7, 1, 29, 45, 59, 137, 351, 37, 1905, 659, 6729]),
    (13, 2684, &[1, 3, 1, 7, 1, 63, 91, 243, 421, 951, 1177, 4013, 4699]),
    (13, 2694, &[1, 3, 1, 13, 13, 27, 59, 89, 471, 715, 1221, 2723, 6625]),
    (13, 2703, &[1, 1, 7, 7, 21, 41, 53, 177, 45, 921, 693, 3373, 1341]),
    (13, 2706, &[1, 1, 1, 3, 17, 23, 33, 81, 195, 907, 207, 1669, 4789]),
    (13, 2712, &[1, 1, 1, 15, 15, 31, 51, 173, 401, 785, 2033, 2685, 4709]),
    (13, 2715, &[1, 3, 5, 9, 21, 23, 57, 199, 471, 597, 699, 115, 3675]),
    (13, 2722, &[1, 3, 5, 5, 5, 17, 97, 43, 141, 859, 1853, 199, 2897]),
    (13, 2727, &[1, 1, 7, 7, 11, 59, 1, 163, 397, 383, 1605, 2565, 7589]),
    (13, 2734, &[1, 3, 7, 13, 3, 43, 3, 113, 343, 659, 931, 2639, 3777]),
    (13, 2742, &[1, 3, 7, 15, 5, 3, 57, 199, 495, 799, 1153, 3979, 7091]),
    (13, 2745, &[1, 1, 5, 7, 3, 19, 69, 101, 375, 913, 391, 2319, 2719]),
    (13, 2751, &[1, 1, 5, 9, 17, 41, 109, 175, 431, 737, 1603, 3401, 2271]),
    (13, 2766, &[1, 3, 7, 7, 25, 47, 27, 231, 503, 117, 443, 747, 3709]),
    (13, 2768, &[1, 1, 7, 13, 19, 21, 27, 1, 99, 131, 1247, 3537, 417]),
    (13, 2780, &[1, 1, 3, 9, 27, 3, 87, 233, 417, 305, 1415, 2855, 3901]),
    (13, 2790, &[1, 3, 3, 15, 5, 53, 77, 29, 101, 915, 1703, 1449, 3259]),
    (13, 2794, &[1, 3, 1, 1, 9, 17, 125, 27, 213, 901, 545, 2165, 5667]),
    (13, 2796, &[1, 1, 1, 13, 17, 57, 35, 147, 139, 725, 1343, 1879, 711]),
    (13, 2801, &[1, 3, 3, 13, 27, 47, 63, 139, 203, 193, 1429, 359, 5205]),
    (13, 2804, &[1, 3, 5, 5, 15, 47, 21, 79, 63, 683, 921, 1297, 1287]),
    (13, 2807, &[1, 1, 3, 13, 17, 11, 57, 103, 363, 455, 1111, 379, 701]),
    (13, 2816, &[1, 1, 3, 1, 25, 5, 57, 193, 203, 543, 409, 3231, 2015]),
    (13, 2821, &[1, 1, 7, 13, 9, 49, 93, 137, 433, 1, 881, 3309, 2527]),
    (13, 2831, &[1, 1, 1, 11, 11, 13, 19, 79, 487, 139, 1559, 1213, 6673]),
    (13, 2834, &[1, 1, 5, 5, 17, 47, 101, 211, 167, 261, 1951, 1809, 867]),
    (13, 2839, &[1, 1, 7, 5, 11, 53, 77, 173, 357, 679, 1557, 851, 1063]),
    (13, 2845, &[1, 1, 3, 9, 5, 39, 45, 59, 281, 895, 13, 473, 3229]),
    (13, 2852, &[1, 3, 7, 15, 3, 19, 15, 25, 371, 225, 1667, 925, 7317]),
    (13, 2856, &[1, 3, 1, 9, 19, 51, 95, 105, 15, 559, 867, 3345, 5747]),
    (13, 2861, &[1, 3, 1, 9, 7, 31, 45, 149, 405, 377, 197, 763, 617]),
    (13, 2873, &[1, 1, 1, 11, 5, 29, 21, 151, 227, 337, 575, 1167, 5115]),
    (13, 2874, &[1, 3, 3, 1, 11, 29, 23, 195, 155, 781, 1567, 2239, 3715]),
    (13, 2888, &[1, 1, 5, 11, 1, 61, 93, 191, 135, 899, 1547, 3907, 6021]),
    (13, 2893, &[1, 3, 3, 13, 31, 23, 125, 181, 63, 663, 2041, 2511, 6003]),
    (13, 2894, &[1, 1, 5, 1, 27, 59, 55, 3, 193, 873, 1063, 105, 1785]),
    (13, 2902, &[1, 3, 7, 5, 23, 17, 29, 101, 201, 91, 955, 25, 7125]),
    (13, 2917, &[1, 1, 3, 5, 21, 19, 73, 201, 353, 489, 329, 3387, 7081]),
    (13, 2921, &[1, 3, 7, 5, 27, 45, 81, 65, 355, 449, 141, 3317, 1615]),
    (13, 2922, &[1, 3, 1, 15, 1, 21, 31, 87, 113, 165, 1471, 2203, 1257]),
    (13, 2929, &[1, 1, 7, 9, 23, 57, 115, 151, 237, 459, 1605, 675, 7917]),
    (13, 2935, &[1, 1, 7, 15, 13, 43, 115, 95, 41, 283, 1839, 61, 5817]),
    (13, 2946, &[1, 1, 3, 7, 15, 37, 57, 143, 285, 205, 655, 1071, 7657]),
    (13, 2951, &[1, 1, 1, 13, 23, 59, 107, 41, 273, 259, 937, 2907, 4705]),
    (13, 2957, &[1, 1, 5, 1, 15, 23, 29, 11, 447, 383, 1735, 3849, 869]),
    (13, 2960, &[1, 3, 5, 11, 3, 15, 57, 13, 223, 587, 1145, 2593, 7589]),
    (13, 2966, &[1, 3, 1, 11, 23, 53, 33, 203, 5, 699, 541, 3309, 631]),
    (13, 2972, &[1, 3, 5, 7, 15, 35, 55, 235, 289, 811, 487, 1709, 5469]),
    (13, 2976, &[1, 1, 5, 9, 29, 31, 37, 203, 435, 877, 191, 1987, 59]),
    (13, 2979, &[1, 3, 7, 11, 19, 53, 51, 57, 117, 781, 1457, 3635, 6357]),
    (13, 2985, &[1, 3, 1, 15, 17, 31, 1, 35, 349, 287, 1571, 433, 3831]),
    (13, 3000, &[1, 3, 1, 5, 23, 15, 113, 29, 279, 227, 1959, 79, 3919]),
    (13, 3003, &[1, 1, 5, 5, 19, 41, 73, 111, 423, 13, 225, 2981, 6031]),
    (13, 3013, &[1, 3, 1, 7, 17, 51, 87, 185, 195, 101, 1031, 2275, 7203]),
    (13, 3018, &[1, 1, 1, 7, 11, 31, 101, 235, 293, 279, 1547, 1749, 2291]),
    (13, 3020, &[1, 1, 1, 5, 15, 1, 17, 203, 369, 385, 487, 2451, 3767]),
    (13, 3025, &[1, 1, 5, 5, 15, 27, 69, 115, 231, 193, 1119, 1025, 3981]),
    (13, 3042, &[1, 1, 7, 11, 13, 13, 37, 49, 487, 875, 1955, 2241, 375]),
    (13, 3047, &[1, 1, 7, 13, 5, 25, 71, 145, 27, 337, 1557, 769, 5535]),
    (13, 3048, &[1, 3, 7, 1, 5, 5, 71, 179, 495, 747, 1607, 2267, 2873]),
    (13, 3051, &[1, 1, 1, 13, 9, 5, 13, 25, 53, 963, 587, 1905, 359]),
    (13, 3054, &[1, 3, 3, 7, 29, 23, 55, 171, 117, 1005, 503, 3243, 2833]),
    (13, 3056, &[1, 1, 7, 13, 3, 43, 103, 211, 199, 93, 559, 2913, 2739]),
    (13, 3065, &[1, 1, 5, 11, 7, 59, 1, 209, 83, 549, 957, 2929, 7823]),
    (13, 3073, &[1, 1, 1, 7, 27, 27, 25, 137, 393, 565, 1051, 2645, 7761]),
    (13, 3074, &[1, 1, 3, 1, 27, 17, 69, 197, 235, 627, 1285, 3007, 6175]),
    (13, 3083, &[1, 3, 1, 1, 7, 21, 97, 219, 329, 901, 939, 3511, 7307]),
    (13, 3086, &[1, 1, 5, 9, 9, 9, 75, 211, 317, 931, 937, 2343, 2449]),
    (13, 3091, &[1, 1, 3, 1, 17, 21, 93, 155, 35, 517, 1211, 2435, 737]),
    (13, 3097, &[1, 3, 5, 13, 21, 17, 7, 77, 409, 59, 1073, 1195, 6617]),
    (13, 3109, &[1, 3, 5, 7, 3, 11, 29, 5, 297, 461, 1485, 373, 3455]),
    (13, 3116, &[1, 3, 1, 7, 25, 43, 11, 197, 127, 229, 797, 459, 3137]),
    (13, 3124, &[1, 3, 1, 9, 5, 1, 43, 91, 241, 161, 823, 407, 2521]),
    (13, 3128, &[1, 1, 1, 13, 7, 39, 75, 215, 271, 783, 845, 241, 1497]),
    (13, 3153, &[1, 1, 7, 3, 9, 51, 127, 117, 317, 799, 395, 1279, 3131]),
    (13, 3160, &[1, 1, 1, 11, 13, 45, 17, 57, 307, 829, 1277, 613, 2141]),
    (13, 3165, &[1, 1, 1, 11, 15, 31, 27, 99, 393, 189, 435, 135, 3087]),
    (13, 3172, &[1, 3, 5, 9, 13, 17, 61, 251, 419, 979, 687, 4025, 1253]),
    (13, 3175, &[1, 1, 5, 9, 13, 31, 13, 39, 99, 849, 1055, 2985, 1281]),
    (13, 3184, &[1, 3, 7, 13, 27, 25, 57, 223, 405, 207, 875, 1483, 3083]),
    (13, 3193, &[1, 1, 5, 7, 1, 33, 119, 89, 337, 801, 1495, 1333, 5285]),
    (13, 3196, &[1, 1, 3, 15, 17, 15, 91, 249, 431, 329, 559, 649, 4633]),
    (13, 3200, &[1, 3, 7, 3, 11, 5, 49, 233, 53, 495, 1167, 3313, 705]),
    (13, 3203, &[1, 1, 7, 1, 23, 29, 69, 85, 469, 375, 1429, 1439, 917]),
    (13, 3205, &[1, 1, 3, 1, 25, 47, 113, 137, 135, 585, 927, 3883, 7911]),
    (13, 3209, &[1, 1, 5, 15, 21, 7, 111, 73, 163, 703, 247, 3893, 1125]),
    (13, 3224, &[1, 3, 7, 13, 29, 33, 71, 59, 307, 963, 299, 3307, 4797]),
    (13, 3239, &[1, 3, 7, 7, 23, 35, 39, 199, 407, 665, 1775, 619, 495]),
    (13, 3251, &[1, 3, 3, 5, 15, 51, 77, 187, 307, 887, 107, 3293, 5623]),
    (13, 3254, &[1, 3, 7, 9, 19, 53, 85, 253, 415, 577, 2025, 3161, 2923]),
    (13, 3265, &[1, 3, 5, 3, 29, 31, 35, 201, 257, 721, 131, 853, 5529]),
    (13, 3266, &[1, 3, 7, 11, 25, 37, 61, 25, 3, 517, 1115, 1197, 909]),
    (13, 3275, &[1, 1, 5, 1, 21, 15, 73, 187, 367, 419, 675, 297, 5873]),
    (13, 3280, &[1, 1, 1, 11, 25, 45, 51, 59, 465, 419, 647, 1263, 7569]),
    (13, 3283, &[1, 3, 5, 3, 11, 5, 17, 89, 7, 487, 1419, 1309, 7655]),
    (13, 3286, &[1, 3, 7, 1, 7, 1, 117, 223, 85, 683, 983, 701, 4075]),
    (13, 3301, &[1, 1, 1, 3, 17, 21, 73, 31, 285, 255, 1995, 3585, 5067]),
    (13, 3302, &[1, 3, 7, 7, 13, 11, 9, 225, 187, 421, 1519, 3161, 621]),
    (13, 3305, &[1, 3, 7, 3, 13, 27, 91, 165, 399, 61, 2039, 1625, 2511]),
    (13, 3319, &[1, 3, 3, 1, 9, 57, 17, 99, 459, 479, 1455, 3229, 4987]),
    (13, 3323, &[1, 1, 1, 13, 15, 61, 65, 143, 277, 913, 187, 3119, 3253]),
    (13, 3326, &[1, 3, 5, 11, 29, 3, 99, 21, 231, 219, 1585, 421, 1641]),
    (13, 3331, &[1, 1, 3, 11, 3, 33, 89, 23, 1, 489, 1671, 2409, 3057]),
    (13, 3348, &[1, 3, 5, 15, 23, 37, 55, 169, 219, 795, 957, 373, 7349]),
    (13, 3351, &[1, 1, 3, 5, 3, 25, 47, 129, 43, 401, 1859, 61, 6215]),
    (13, 3358, &[1, 3, 3, 11, 13, 31, 41, 185, 219, 1011, 1885, 3533, 7603]),
    (13, 3368, &[1, 3, 3, 9, 3, 55, 5, 167, 503, 199, 147, 3815, 2547]),
    (13, 3374, &[1, 3, 3, 1, 19, 63, 57, 233, 273, 413, 1737, 1511, 3285]),
    (13, 3376, &[1, 3, 5, 9, 17, 35, 125, 193, 311, 975, 1167, 1351, 6177]),
    (13, 3379, &[1, 1, 5, 11, 31, 31, 71, 27, 11, 375, 873, 3733, 4385]),
    (13, 3385, &[1, 1, 3, 1, 21, 13, 123, 101, 185, 73, 1167, 751, 5925]),
    (13, 3386, &[1, 1, 5, 9, 15, 27, 37, 51, 219, 71, 1181, 889, 4603]),
    (13, 3396, &[1, 3, 7, 5, 27, 63, 11, 37, 343, 719, 1721, 3693, 4061]),
    (13, 3420, &[1, 3, 5, 3, 3, 63, 5, 213, 215, 447, 1275, 261, 2653]),
    (13, 3423, &[1, 3, 3, 15, 21, 37, 117, 109, 465, 721, 1527, 3753, 5123]),
    (13, 3430, &[1, 3, 3, 13, 7, 17, 91, 215, 379, 193, 1197, 3401, 5451]),
    (13, 3433, &[1, 1, 5, 7, 23, 45, 99, 129, 219, 129, 135, 3237, 5403]),
    (13, 3434, &[1, 1, 1, 11, 1, 59, 77, 67, 45, 243, 91, 2069, 4857]),
    (13, 3439, &[1, 1, 3, 7, 17, 17, 93, 247, 71, 535, 311, 2371, 2825]),
    (13, 3442, &[1, 3, 7, 11, 13, 45, 97, 235, 333, 1011, 109, 407, 35]),
    (13, 3444, &[1, 1, 7, 13, 17, 23, 47, 133, 359, 697, 1507, 3491, 3583]),
    (13, 3453, &[1, 1, 7, 3, 27, 9, 85, 133, 469, 197, 47, 959, 5907]),
    (13, 3464, &[1, 3, 1, 13, 5, 35, 97, 57, 417, 101, 1735, 3995, 3099]),
    (13, 3477, &[1, 3, 7, 11, 11, 9, 57, 97, 383, 189, 179, 1111, 5293]),
    (13, 3478, &[1, 3, 5, 1, 3, 7, 57, 45, 471, 469, 1557, 3823, 1445]),
    (13, 3482, &[1, 3, 5, 15, 27, 31, 31, 49, 491, 7, 1, 949, 7675]),
    (13, 3487, &[1, 3, 1, 7, 13, 53, 89, 233, 99, 199, 7, 525, 1787]),
    (13, 3497, &[1, 1, 5, 11, 25, 45, 37, 121, 461, 241, 1783, 421, 1323]),
    (13, 3500, &[1, 1, 7, 5, 1, 7, 107, 55, 359, 461, 1581, 3497, 6661]),
    (13, 3505, &[1, 3, 1, 5, 27, 45, 89, 85, 497, 175, 1729, 3367, 5273]),
    (13, 3506, &[1, 3, 7, 13, 25, 57, 43, 211, 85, 391, 1119, 3483, 4145]),
    (13, 3511, &[1, 3, 7, 9, 11, 49, 53, 173, 369, 645, 1111, 2309, 189]),
    (13, 3512, &[1, 1, 1, 7, 1, 25, 97, 153, 313, 377, 509, 3027, 5217]),
    (13, 3515, &[1, 1, 5, 7, 25, 51, 27, 159, 223, 221, 723, 1243, 4473]),
    (13, 3525, &[1, 1, 7, 13, 25, 31, 117, 175, 329, 5, 1357, 2971, 6619]),
    (13, 3532, &[1, 1, 1, 3, 9, 27, 61, 97, 235, 81, 491, 4011, 3193]),
    (13, 3538, &[1, 1, 7, 5, 7, 55, 45, 103, 337, 3, 1231, 1077, 2311]),
    (13, 3540, &[1, 1, 3, 9, 31, 9, 101, 149, 111, 497, 1017, 2909, 7097]),
    (13, 3547, &[1, 3, 7, 13, 25, 31, 79, 89, 427, 375, 1603, 937, 7127]),
    (13, 3549, &[1, 3, 5, 5, 29, 37, 119, 97, 511, 183, 1109, 1361, 483]),
    (13, 3560, &[1, 1, 1, 1, 25, 31, 125, 51, 385, 111, 93, 1875, 2339]),
    (13, 3571, &[1, 1, 3, 9, 27, 15, 69, 91, 305, 763, 1331, 1239, 7565]),
    (13, 3577, &[1, 1, 3, 13, 5, 53, 31, 71, 383, 525, 1743, 951, 4175]),
    (13, 3583, &[1, 3, 5, 13, 5, 53, 103, 255, 149, 573, 893, 2827, 7029]),
    (13, 3590, &[1, 1, 5, 3, 9, 23, 75, 255, 135, 7, 1835, 3985, 7713]),
    (13, 3593, &[1, 3, 7, 5, 19, 59, 15, 147, 81, 739, 905, 3411, 933]),
    (13, 3594, &[1, 3, 5, 1, 5, 37, 69, 73, 327, 885, 1911, 1509, 847]),
    (13, 3599, &[1, 3, 1, 11, 31, 27, 93, 157, 5, 815, 937, 2999, 1961]),
    (13, 3601, &[1, 1, 1, 15, 15, 9, 59, 211, 331, 809, 415, 2785, 3471]),
    (13, 3602, &[1, 3, 7, 15, 13, 9, 13, 121, 233, 729, 1739, 899, 7015]),
    (13, 3613, &[1, 3, 3, 7, 23, 11, 87, 53, 335, 157, 1097, 3549, 1931]),
    (13, 3623, &[1, 1, 7, 1, 19, 31, 125, 61, 47, 791, 1953, 2301, 6479]),
    (13, 3630, &[1, 3, 1, 5, 7, 19, 89, 49, 393, 847, 1509, 1025, 2019]),
    (13, 3638, &[1, 1, 1, 5, 5, 27, 125, 253, 317, 745, 615, 2951, 1583]),
    (13, 3649, &[1, 3, 7, 15, 7, 27, 5, 127, 135, 95, 1361, 2287, 6829]),
    (13, 3655, &[1, 1, 1, 11, 5, 17, 1, 167, 9, 139, 981, 3999, 7761]),
    (13, 3662, &[1, 1, 3, 13, 23, 15, 57, 79, 455, 273, 1805, 2463, 5821]),
    (13, 3667, &[1, 3, 5, 5, 19, 63, 103, 235, 277, 585, 243, 1171, 857]),
    (13, 3669, &[1, 1, 5, 9, 15, 25, 69, 167, 341, 283, 1627, 2001, 4731]),
    (13, 3676, &[1, 1, 3, 3, 29, 33, 99, 241, 223, 975, 1539, 1717, 6757]),
    (13, 3683, &[1, 3, 5, 9, 19, 33, 103, 151, 243, 477, 1647, 717, 3417]),
    (13, 3700, &[1, 1, 1, 9, 21, 45, 63, 133, 51, 229, 793, 2629, 5491]),
    (13, 3709, &[1, 1, 7, 3, 23, 41, 61, 119, 349, 263, 1927, 1003, 5123]),
    (13, 3710, &[1, 1, 1, 1, 5, 53, 125, 247, 11, 649, 1531, 3669, 7067]),
    (13, 3713, &[1, 1, 7, 3, 29, 51, 45, 225, 349, 795, 541, 3199, 1583]),
    (13, 3723, &[1, 1, 5, 5, 11, 29, 3, 163, 1, 873, 2009, 1057, 635]),
    (13, 3725, &[1, 3, 3, 15, 23, 51, 51, 193, 253, 373, 751, 609, 3027]),
    (13, 3728, &[1, 1, 7, 9, 1, 35, 121, 209, 149, 793, 389, 2425, 1845]),
    (13, 3734, &[1, 1, 3, 15, 31, 3, 101, 81, 431, 11, 127, 3035, 4789]),
    (13, 3737, &[1, 1, 3, 3, 15, 13, 15, 237, 359, 509, 1737, 2361, 375]),
    (13, 3738, &[1, 1, 7, 7, 23, 5, 87, 155, 77, 483, 749, 517, 5347]),
    (13, 3744, &[1, 1, 1, 13, 1, 37, 119, 103, 309, 493, 531, 1807, 7783]),
    (13, 3750, &[1, 1, 3, 1, 7, 43, 107, 97, 365, 11, 179, 821, 6207]),
    (13, 3762, &[1, 1, 3, 1, 17, 11, 3, 9, 9, 251, 1645, 289, 1479]),
    (13, 3764, &[1, 1, 7, 9, 3, 17, 43, 43, 271, 419, 659, 3571, 3571]),
    (13, 3774, &[1, 1, 7, 1, 15, 27, 51, 173, 415, 311, 1127, 897, 4185]),
    (13, 3776, &[1, 1, 7, 15, 3, 13, 21, 57, 161, 565, 1365, 3093, 1397]),
    (13, 3786, &[1, 3, 5, 7, 29, 25, 67, 209, 109, 477, 1513, 1177, 8095]),
    (13, 3800, &[1, 3, 7, 9, 1, 19, 83, 137, 43, 205, 43, 601, 463]),
    (13, 3803, &[1, 1, 7, 15, 1, 49, 113, 71, 357, 987, 35, 1535, 2547]),
    (13, 3809, &[1, 3, 3, 1, 1, 47, 85, 93, 365, 661, 165, 3477, 1299]),
    (13, 3816, &[1, 1, 1, 5, 13, 43, 105, 7, 459, 949, 755, 745, 5987]),
    (13, 3821, &[1, 1, 5, 5, 7, 9, 25, 99, 151, 139, 1641, 3591, 7117]),
    (13, 3827, &[1, 1, 5, 11, 7, 57, 93, 171, 37, 911, 175, 1195, 6753]),
    (13, 3829, &[1, 3, 5, 9, 29, 57, 27, 167, 247, 853, 1077, 2493, 7179]),
    (13, 3836, &[1, 3, 1, 5, 27, 63, 105, 67, 287, 453, 419, 3529, 5829]),
    (13, 3842, &[1, 1, 7, 1, 17, 31, 107, 75, 57, 555, 1175, 2359, 4503]),
    (13, 3844, &[1, 1, 1, 5, 25, 27, 85, 183, 121, 379, 635, 3487, 5225]),
    (13, 3847, &[1, 1, 1, 11, 1, 63, 7, 51, 451, 89, 383, 199, 7301]),
    (13, 3853, &[1, 3, 5, 9, 21, 53, 83, 165, 395, 867, 1061, 773, 51]),
    (13, 3861, &[1, 1, 5, 5, 25, 1, 69, 9, 481, 771, 529, 1865, 837]),
    (13, 3871, &[1, 3, 7, 15, 9, 39, 81, 71, 5, 587, 1307, 3583, 5357]),
    (13, 3872, &[1, 1, 5, 13, 19, 49, 95, 105, 269, 433, 29, 3681, 5525]),
    (13, 3881, &[1, 1, 5, 15, 31, 47, 53, 249, 201, 901, 1991, 1751, 4813]),
    (13, 3890, &[1, 3, 3, 15, 17, 9, 111, 217, 259, 161, 1401, 411, 5551]),
    (13, 3892, &[1, 3, 7, 7, 31, 17, 75, 141, 359, 753, 503, 3281, 6791]),
    (13, 3909, &[1, 3, 1, 3, 31, 1, 79, 237, 343, 481, 1655, 3931, 3425]),
    (13, 3921, &[1, 1, 7, 15, 29, 55, 105, 251, 141, 715, 317, 779, 405]),
    (13, 3934, &[1, 3, 1, 11, 19, 7, 35, 47, 55, 373, 833, 467, 2965]),
    (13, 3938, &[1, 3, 1, 15, 21, 35, 117, 17, 295, 745, 1921, 221, 135]),
    (13, 3947, &[1, 1, 1, 15, 17, 13, 33, 39, 219, 907, 375, 1051, 5831]),
    (13, 3950, &[1, 1, 5, 11, 17, 33, 29, 77, 383, 71, 493, 2355, 5963]),
    (13, 3952, &[1, 1, 1, 13, 31, 39, 17, 171, 339, 197, 1023, 921, 3361]),
    (13, 3964, &[1, 3, 3, 5, 29, 45, 7, 207, 3, 423, 2047, 3363, 3889]),
    (13, 3974, &[1, 1, 7, 15, 21, 25, 75, 237, 111, 643, 833, 2757, 3733]),
    (13, 3980, &[1, 3, 7, 15, 17, 5, 97, 147, 211, 585, 613, 121, 2301]),
    (13, 3983, &[1, 3, 7, 1, 31, 45, 29, 15, 339, 703, 1923, 1165, 7661]),
    (13, 3986, &[1, 1, 3, 1, 1, 7, 79, 207, 341, 659, 1981, 941, 3071]),
    (13, 3995, &[1, 3, 7, 5, 7, 11, 17, 51, 27, 111, 1985, 2587, 5089]),
    (13, 3998, &[1, 1, 7, 15, 31, 17, 111, 41, 93, 195, 167, 2759, 7489]),
    (13, 4001, &[1, 1, 3, 5, 23, 59, 9, 131, 91, 245, 399, 2865, 2803]),
    (13, 4002, &[1, 1, 5, 7, 29, 39, 119, 201, 487, 589, 2001, 3837, 7459]),
    (13, 4004, &[1, 3, 5, 3, 15, 49, 71, 89, 81, 81, 911, 303, 2889]),
    (13, 4008, &[1, 3, 1, 1, 29, 61, 99, 23, 97, 535, 1015, 4037, 7399]),
    (13, 4011, &[1, 3, 7, 1, 17, 31, 95, 133, 227, 791, 887, 3737, 5645]),
    (13, 4016, &[1, 1, 3, 13, 21, 45, 125, 167, 79, 999, 1159, 2539, 3089]),
    (13, 4033, &[1, 3, 5, 1, 5, 9, 39, 167, 279, 357, 217, 4009, 3221]),
    (13, 4036, &[1, 1, 3, 9, 13, 15, 115, 205, 269, 729, 1623, 2549, 6485]),
    (13, 4040, &[1, 3, 3, 3, 31, 15, 67, 191, 445, 509, 739, 4033, 4177]),
    (13, 4053, &[1, 1, 1, 7, 7, 37, 11, 97, 385, 767, 1333, 19, 1303]),
    (13, 4058, &[1, 1, 3, 9, 9, 9, 117, 189, 77, 341, 971, 267, 3681]),
    (13, 4081, &[1, 3, 5, 5, 1, 7, 87, 47, 265, 1015, 79, 2485, 4319]),
    (13, 4091, &[1, 1, 1, 7, 31, 61, 103, 233, 157, 665, 889, 1017, 6197]),
    (13, 4094, &[1, 3, 3, 15, 7, 33, 75, 37, 169, 639, 169, 2613, 525]),
];

/// Largest dimension covered by the embedded table.
pub const MAX_SOBOL_DIMENSION: usize = PARAMETERS.len() + 1;

/// Direction numbers of dimension `index` (zero-based) as 32-bit
/// fixed-point fractions, most significant digit first.
///
/// # Panics
///
/// Panics if `index >= MAX_SOBOL_DIMENSION`.
pub(crate) fn direction_numbers(index: usize) -> [u32; SOBOL_COLUMNS] {
    let mut v = [0u32; SOBOL_COLUMNS];
    if index == 0 {
        for (k, entry) in v.iter_mut().enumerate() {
            *entry = 1 << (31 - k);
        }
        return v;
    }

    let (degree, coefficients, initial) = PARAMETERS[index - 1];
    let s = degree as usize;
    for (k, &m) in initial.iter().enumerate() {
        v[k] = m << (31 - k);
    }
    for k in s..SOBOL_COLUMNS {
        v[k] = v[k - s] ^ (v[k - s] >> s);
        for l in 1..s {
            if (coefficients >> (s - 1 - l)) & 1 == 1 {
                v[k] ^= v[k - l];
            }
        }
    }
    v
}
