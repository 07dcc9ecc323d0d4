//! Fixed code templates for each constructor variant.
//!
//! Pure text substitution, no I/O. Bodies are indented to sit inside the
//! `single_task` lambda of the kernel wrapper and report failures through
//! `resAcc[0]`.

/// Test body for `vec()`.
///
/// Default construction leaves element values unspecified, so only the
/// static type and the element count are checked.
pub(crate) fn default_block(cxx: &str, width: u32) -> String {
    format!(
        r#"        auto test = sycl::vec<{cxx}, {width}>();
        if (!check_equal_type_bool<sycl::vec<{cxx}, {width}>>(test)) {{
          resAcc[0] = false;
        }}
        if (!check_vector_size<{cxx}, {width}>(test)) {{
          resAcc[0] = false;
        }}
"#
    )
}

/// Test body for `vec(const T &arg)`, broadcasting `val` to all elements.
pub(crate) fn explicit_block(cxx: &str, width: u32, val: &str, vals: &str) -> String {
    format!(
        r#"        const {cxx} val = {val};
        {cxx} vals[] = {{{vals}}};
        auto test = sycl::vec<{cxx}, {width}>(val);
        if (!check_equal_type_bool<sycl::vec<{cxx}, {width}>>(test)) {{
          resAcc[0] = false;
        }}
        if (!check_vector_size<{cxx}, {width}>(test)) {{
          resAcc[0] = false;
        }}
        if (!check_vector_values<{cxx}, {width}>(test, vals)) {{
          resAcc[0] = false;
        }}
"#
    )
}

/// Test body for `vec<T, dims>(const &vec<T, dims>)`.
pub(crate) fn vec_copy_block(cxx: &str, width: u32, val: &str, vals: &str) -> String {
    format!(
        r#"        auto test = sycl::vec<{cxx}, {width}>({val});
        {cxx} vals[] = {{{vals}}};
        if (!check_equal_type_bool<sycl::vec<{cxx}, {width}>>(test)) {{
          resAcc[0] = false;
        }}
        if (!check_vector_size<{cxx}, {width}>(test)) {{
          resAcc[0] = false;
        }}
        if (!check_vector_values<{cxx}, {width}>(test, vals)) {{
          resAcc[0] = false;
        }}
"#
    )
}

/// Test body for `vec(vector_t)`.
///
/// Interop contents are implementation-defined, so the body only exercises
/// the construction itself.
pub(crate) fn interop_block(cxx: &str, width: u32) -> String {
    format!(
        r#"        sycl::vec<{cxx}, {width}>::vector_t interopVec{{}};
        auto test = sycl::vec<{cxx}, {width}>(interopVec);
"#
    )
}
