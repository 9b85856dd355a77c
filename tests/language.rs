use briar::interpret;

fn assert_output(src: &str, expected: &str) {
    let (ok, output) = interpret(src);
    assert!(ok, "Script failed: {output}\nSource: {src}");
    assert_eq!(output, expected, "Source: {src}");
}

fn assert_error(src: &str) {
    let (ok, output) = interpret(src);
    assert!(!ok, "Script succeeded but was expected to fail: {output}\nSource: {src}");
    assert!(output.starts_with("Error on line"), "Diagnostic missing prefix: {output}");
}

#[test]
fn integer_arithmetic() {
    assert_output("x = 1\ny = 2\nz = 3 * x + y\nprint(z)", "5");
    assert_output("print(2 + 3 * 4)", "14");
    assert_output("print((2 + 3) * 4)", "20");
}

#[test]
fn number_arithmetic_and_formatting() {
    let src = r"
        x = 5.5
        y = 2.0
        print(x + y)  // 7.5
        print(x - y)  // 3.5
        print(x * y)  // 11
        print(x / y)  // 2.75
        print(x % y)  // 1.5
        print(x ^ y)  // 30.25
        print(-x)     // -5.5
        print(+x)     // 5.5
    ";
    assert_output(src, "7.53.5112.751.530.25-5.55.5");
}

#[test]
fn scientific_notation() {
    assert_output("x = 1.23e-4\nprint(x * 10000)", "1.23");
    assert_output("y = 5e2\nprint(y / 100)", "5");
    assert_output("print(1.23e-1 * 100)", "12.3");
}

#[test]
fn fractional_rendering_strips_zeros() {
    assert_output("print(0.5)", "0.5");
    assert_output("print(1 / 3)", "0.333333");
    assert_output("print(2.5 + 2.5)", "5");
    assert_output("print(1000000)", "1000000");
}

#[test]
fn power_is_left_associative() {
    assert_output("print(2 ^ 3 ^ 2)", "64");
    assert_output("print(2 ^ 3 + 4)", "12");
    assert_output("print(2 ^ (3 + 4))", "128");
}

#[test]
fn comparison_operators() {
    assert_output("print(5 == 5)", "1");
    assert_output("print(5 != 3)", "1");
    assert_output("print(5 > 3)", "1");
    assert_output("print(5 < 3)", "0");
    assert_output("print(5 >= 5)", "1");
    assert_output("print(3 <= 5)", "1");
}

#[test]
fn logical_operators() {
    let src = r"
        a = true
        b = false
        c = 1
        d = 0
        print(a and b)
        print(a or b)
        print(not a)
        print(not b)
        print(c and a)
        print(d or b)
        print(not c)
        print(not d)
    ";
    assert_output(src, "01011001");
    assert_output("print(not not 5)", "1");
    assert_output("print(not 0)", "1");
    assert_output("print(!0)", "1");
}

#[test]
fn compound_assignments() {
    let src = r"
        x = 10.0
        x += 5.0
        print(x)
        x -= 3.0
        print(x)
        x *= 2.0
        print(x)
        x /= 4.0
        print(x)
        x %= 5.0
        print(x)
        x ^= 2.0
        print(x)
    ";
    assert_output(src, "151224611");
}

#[test]
fn compound_assignment_requires_existing_variable() {
    assert_error("q += 1");
}

#[test]
fn comments_are_ignored() {
    let src = r"
        x = 1 // This is a comment
        // Another comment
        y = 2
        print(x + y) // Print sum
    ";
    assert_output(src, "3");
}

#[test]
fn string_concat_suffix_removal_and_repetition() {
    let src = r#"
        s1 = "Hello"
        s2 = " World"
        s3 = s1 + s2
        print(s3)
        s4 = s3 - "World"
        print(s4)
        s5 = "Ha" * 3
        print(s5)
    "#;
    assert_output(src, "Hello WorldHello HaHaHa");
}

#[test]
fn string_minus_keeps_left_when_not_a_suffix() {
    assert_output(r#"s = "Hello World"
print(s - "xyz")"#,
                  "Hello World");
}

#[test]
fn string_times_fractional_count() {
    // full copies, then floor(len * fraction) leading characters
    assert_output(r#"s = "abc"
print(s * 2.7)
print(s * 0.9)"#,
                  "abcabcabab");
    assert_output(r#"print("xy" * 0)"#, "");
    assert_output(r#"print("xy" * -3)"#, "");
}

#[test]
fn string_concat_with_number_uses_canonical_format() {
    assert_output(r#"print("a" + 1.5)"#, "a1.5");
    assert_output(r#"print("n=" + 7)"#, "n=7");
    assert_output(r#"print("v" + 2.50)"#, "v2.5");
}

#[test]
fn string_comparisons_are_lexicographic() {
    let src = r#"
        print("abc" < "def")
        print("abc" > "def")
        print("abc" == "abc")
        print("abc" != "def")
        print("abc" <= "abc")
        print("def" >= "abc")
    "#;
    assert_output(src, "101111");
}

#[test]
fn string_indexing_wraps_negative_indexes() {
    let src = r#"
        s = "Hello World"
        print(s[0])
        print(s[6])
        print(s[-1])
        print(s[-6])
    "#;
    assert_output(src, "HWd ");
}

#[test]
fn out_of_range_index_is_nil() {
    assert_output(r#"s = "abc"
print(s[10])
print(s[3])
print(s[-4])"#,
                  "nilnilnil");
    assert_output("l = [1, 2, 3]\nprint(l[5])\nprint(l[-4])", "nilnil");
    assert_output("print(nil == [1][10])", "1");
}

#[test]
fn string_slicing() {
    let src = r#"
        s = "Hello World"
        print(s[0:5])
        print(s[6:])
        print(s[:5])
        print(s[:])
        print(s[-5:])
        print(s[:-6])
    "#;
    assert_output(src, "HelloWorldHelloHello WorldWorldHello");
}

#[test]
fn slice_bounds_clamp_and_cross() {
    assert_output(r#"print("abc"[2:1])"#, "");
    assert_output(r#"print("abc"[0:100])"#, "abc");
    assert_output(r#"print("abc"[-100:100])"#, "abc");
    assert_output("print([1, 2, 3][2:1])", "[]");
    assert_output("l = [1, 2, 3]\nprint(l[0:len(l)])", "[1, 2, 3]");
}

#[test]
fn escape_sequences_decode() {
    assert_output(r#"s = "Hello\nWorld\tTab\"Quote\\"
print(s)"#,
                  "Hello\nWorld\tTab\"Quote\\");
    assert_output(r#"s = "Line1\nLine2\rTab\tQuote\"Backslash\\"
print(s)"#,
                  "Line1\nLine2\rTab\tQuote\"Backslash\\");
}

#[test]
fn unknown_escape_keeps_the_backslash() {
    assert_output(r#"print("a\qb")"#, "a\\qb");
}

#[test]
fn unterminated_string_is_a_lexical_error() {
    assert_error("s = \"abc");
}

#[test]
fn malformed_exponent_is_a_lexical_error() {
    assert_error("x = 1e+");
    assert_error("x = 5e");
}

#[test]
fn unrecognized_character_is_an_error() {
    assert_error("x = 1 @ 2");
}

#[test]
fn list_concat_and_repetition() {
    assert_output("l1 = [1, 2, 3]\nl2 = [4, 5, 6]\nprint(l1 + l2)", "[1, 2, 3, 4, 5, 6]");
    assert_output("print([1, 2] * 3)", "[1, 2, 1, 2, 1, 2]");
    assert_output("print([1, 2] * 2.9)", "[1, 2, 1, 2]");
    assert_output("print([1, 2] * 0)", "[]");
    assert_output("print([1, 2] * -1)", "[]");
}

#[test]
fn list_concat_produces_a_fresh_list() {
    let src = r"
        a = [1]
        b = [2]
        c = a + b
        push(c, 9)
        print(a)
        print(b)
        print(c)
        print(len(c) == len(a) + len(b) + 1)
    ";
    assert_output(src, "[1][2][1, 2, 9]1");
}

#[test]
fn list_indexing() {
    let src = r"
        l = [10, 20, 30, 40, 50]
        print(l[0])
        print(l[2])
        print(l[-1])
        print(l[-2])
    ";
    assert_output(src, "10305040");
}

#[test]
fn list_slicing() {
    let src = r"
        l = [1, 2, 3, 4, 5]
        print(l[0:3])
        print(l[2:])
        print(l[:2])
        print(l[:])
        print(l[-3:])
        print(l[:-2])
    ";
    assert_output(src, "[1, 2, 3][3, 4, 5][1, 2][1, 2, 3, 4, 5][3, 4, 5][1, 2, 3]");
}

#[test]
fn list_slice_is_a_copy() {
    assert_output("a = [1, 2]\nb = a[:]\npush(b, 3)\nprint(a)\nprint(b)", "[1, 2][1, 2, 3]");
}

#[test]
fn lists_are_reference_shared() {
    assert_output("a = [1]\nb = a\npush(b, 2)\nprint(a)", "[1, 2]");
    let src = r"
        l = [1]
        wrap = function(inner)
            push(inner, 2)
            return nil
        end function
        wrap(l)
        print(l)
    ";
    assert_output(src, "[1, 2]");
}

#[test]
fn mixed_type_list_rendering() {
    let src = r#"
        l = [1, "hello", 3.14, "world"]
        print(l)
        print(l[1])
        print(l[2])
    "#;
    assert_output(src, "[1, \"hello\", 3.14, \"world\"]hello3.14");
}

#[test]
fn nested_lists_render_one_level_deep() {
    let src = r"
        l = [1, [2, 3, 4], 5]
        print(l)
        print(l[1])
        print(l[1][1])
    ";
    assert_output(src, "[1, [2, 3, 4], 5][2, 3, 4]3");
    // two levels down only the separator survives
    assert_output("print([1, [2, [3]], 4])", "[1, [2, ], 4]");
}

#[test]
fn empty_string_and_list() {
    let src = r#"
        s = ""
        l = []
        print(s + "test")
        print(l + [1])
        print(s[0])
        print(l[0])
    "#;
    assert_output(src, "test[1]nilnil");
}

#[test]
fn nil_comparisons() {
    let src = r"
        print(nil == nil)
        print(nil != nil)
        print(nil == 0)
        print(nil != 0)
    ";
    assert_output(src, "1001");
    assert_output("print(nil)", "nil");
}

#[test]
fn nil_rejects_other_operators() {
    assert_error("print(nil + 1)");
    assert_error("print(nil < nil)");
}

#[test]
fn invalid_operand_combinations_fail() {
    assert_error(r#"print(5 + "a")"#);
    assert_error(r#"print("a" - 5)"#);
    assert_error(r#"print(5 and "a")"#);
    assert_error("print([1] == [1])");
    assert_error(r#"print(-"a")"#);
}

#[test]
fn division_and_modulo_by_zero_fail() {
    assert_error("print(1 / 0)");
    assert_error("print(1 % 0)");
}

#[test]
fn truthiness() {
    assert_output(r#"if "" then print(1) else print(2) end if"#, "2");
    assert_output(r#"if "x" then print(1) else print(2) end if"#, "1");
    assert_output("if [] then print(1) else print(2) end if", "2");
    assert_output("if [0] then print(1) else print(2) end if", "1");
    assert_output("if nil then print(1) else print(2) end if", "2");
    assert_output("if 0.0 then print(1) else print(2) end if", "2");
    // a function value is never truthy
    assert_output("f = function() return 1 end function\nif f then print(1) else print(2) end if",
                  "2");
}

#[test]
fn if_else_chains() {
    let src = r#"
        x = 5
        if x < 0 then
            print("neg")
        else if x == 5 then
            print("five")
        else
            print("other")
        end if
    "#;
    assert_output(src, "five");
    assert_output("if 0 then print(1) end if\nprint(9)", "9");
    assert_output("if 0 then print(1) else if 0 then print(2) else print(3) end if", "3");
}

#[test]
fn while_loop_with_break_and_continue() {
    let src = r"
        i = 0
        total = 0
        while true
            i += 1
            if i > 5 then break end if
            if i % 2 == 0 then continue end if
            total += i
        end while
        print(total)
    ";
    assert_output(src, "9");
    assert_output("i = 0\nwhile i < 3 do i += 1 end while\nprint(i)", "3");
}

#[test]
fn for_loop_with_break_and_continue() {
    let src = r"
        total = 0
        for i in range(10)
            if i == 5 then break end if
            if i % 2 == 0 then continue end if
            total += i
        end for
        print(total)
    ";
    assert_output(src, "4");
}

#[test]
fn for_loop_variable_stays_in_scope() {
    assert_output("for i in range(3) end for\nprint(i)", "2");
}

#[test]
fn for_loop_iterates_a_snapshot() {
    assert_output("a = [1, 2]\nfor i in a do push(a, i) end for\nprint(len(a))", "4");
}

#[test]
fn for_loop_requires_a_list() {
    assert_error(r#"for i in "abc" print(i) end for"#);
    assert_error("for i in 5 print(i) end for");
}

#[test]
fn stray_control_signals_are_errors() {
    assert_error("break");
    assert_error("continue");
    assert_error("return 5");
    // a break escaping a function body has no loop to land in
    assert_error("f = function() break end function\nfor i in [1] f() end for");
}

#[test]
fn simple_function_call() {
    let src = r"
        incr = function(value)
            return value + 1
        end function

        x = incr(2)
        print(x)
    ";
    assert_output(src, "3");
}

#[test]
fn function_without_return_yields_nil() {
    assert_output("f = function() end function\nprint(f())", "nil");
    assert_output("f = function(x) x + 1 end function\nprint(f(2))", "nil");
}

#[test]
fn function_as_argument() {
    let src = r"
        incr = function(value)
            return value + 1
        end function

        printresult = function(value, func)
            result = func(value)
            print(result)
        end function

        printresult(2, incr)
    ";
    assert_output(src, "3");
    let src = r"
        apply = function(f, x)
            return f(x)
        end function
        double = function(x)
            return x * 2
        end function
        print(apply(double, 5))
    ";
    assert_output(src, "10");
}

#[test]
fn nested_function_definitions() {
    // inner and outer `value` are different symbols; there are no closures
    let src = r"
        incr_and_print = function(value)
            incr = function(value)
                return value + 1
            end function

            print(incr(value))
        end function

        incr_and_print(2)
    ";
    assert_output(src, "3");
}

#[test]
fn functions_stored_in_lists() {
    let src = r"
        funcs = [
            function() return 1 end function,
            function() return 2 end function,
            function() return 3 end function,
        ]

        print(funcs[0]())
        print(funcs[1]())
        print(funcs[2]())
    ";
    assert_output(src, "123");
}

#[test]
fn iterative_fibonacci() {
    let src = r"
        fib = function(n)
            if n == 0 then
                return 0
            end if
            a = 0
            b = 1
            for i in range(n - 1)
                c = a + b
                a = b
                b = c
            end for
            return b
        end function
        print(fib(10))
    ";
    assert_output(src, "55");
}

#[test]
fn fibonacci_single_line_with_separators() {
    let src = "fib = function(n) if n == 0 then return 0 end if; a=0;b=1; \
               for i in range(n - 1) do c=a+b;a=b;b=c end for; return b end function; \
               print(fib(10))";
    assert_output(src, "55");
}

#[test]
fn fizzbuzz() {
    let src = r#"
        fizzBuzz = function(n)
            for i in range(1, n)
                s = "Fizz" * (i % 3 == 0) + "Buzz" * (i % 5 == 0)
                if s == "" then
                    print(i)
                else
                    print(s)
                end if
            end for
        end function
        fizzBuzz(16)
    "#;
    assert_output(src, "12Fizz4BuzzFizz78FizzBuzz11Fizz1314FizzBuzz");
}

#[test]
fn max_over_a_list() {
    let src = r"
        max = function(arr)
            if len(arr) == 0 then
                return nil
            end if
            m = arr[0]
            for i in arr
                if i > m then m = i end if
            end for
            return m
        end function
        print(max([10, -1, 0, 2, 2025, 239]))
        print(max([]))
    ";
    assert_output(src, "2025nil");
}

#[test]
fn call_inside_loop() {
    let src = r"
        square = function(x)
            return x * x
        end function
        for i in range(1, 5)
            print(square(i))
        end for
    ";
    assert_output(src, "14916");
}

#[test]
fn multiple_argument_kinds() {
    let src = r#"
        process = function(num, str, lst, nilval)
            print(num + 5)
            print(str + "!")
            print(lst[0])
            print(nilval == nil)
        end function
        process(10, "Hello", [1, 2, 3], nil)
    "#;
    assert_output(src, "15Hello!11");
}

#[test]
fn call_arity_is_checked() {
    assert_error("f = function(a, b) return a end function\nprint(f(1))");
    assert_error("f = function() return 1 end function\nprint(f(1))");
    assert_error("print(len())");
    assert_error("print(len(1, 2))");
    assert_error("print(range(1, 2, 3, 4))");
}

#[test]
fn calls_require_functions() {
    assert_error("x = 5\nx()");
    assert_error("foo()");
}

#[test]
fn no_closures_means_no_outer_variables() {
    assert_error("g = 5\nf = function() return g end function\nprint(f())");
    // and therefore no direct recursion either
    assert_error("f = function(n) if n <= 1 then return 1 end if return n * f(n - 1) end function\nprint(f(5))");
}

#[test]
fn chained_postfix_forms() {
    assert_output("make = function() return function() return 7 end function end function\nprint(make()())",
                  "7");
    assert_output(r#"print(["a", "b"][-1])"#, "b");
    assert_output("print([[1, 2], [3, 4]][1][0])", "3");
}

#[test]
fn assignment_is_right_associative_and_yields_its_value() {
    assert_output("a = b = 2\nprint(a + b)", "4");
}

#[test]
fn assignment_target_must_be_an_identifier() {
    assert_error("a = [1, 2]\na[0] = 5");
    assert_error(r#"s = "ab"
s[0:1] = "c""#);
    assert_error("1 = 2");
}

#[test]
fn print_requires_parentheses() {
    assert_error("print 5");
    assert_error("x = print(5)");
}

#[test]
fn unmatched_block_keywords_fail() {
    assert_error("if 1 then print(1) end while");
    assert_error("for i in [1] print(i) end if");
    assert_error("while 0 print(1) end for");
    assert_error("f = function() return 1 end for");
    assert_error("if 1 then print(1)");
}

#[test]
fn print_of_a_string_literal_with_spaces_is_quoted() {
    assert_output(r#"print("hello world")"#, "\"hello world\"");
    assert_output(r#"print("hello")"#, "hello");
    assert_output(r#"s = "hello world"
print(s)"#,
                  "hello world");
}

#[test]
fn println_appends_a_newline_value() {
    assert_output(r#"println("hi")
print(2)"#,
                  "hi\n2");
    // println exists only in statement position
    assert_error("x = println(5)");
}

#[test]
fn functions_render_as_nothing() {
    assert_output("f = function() end function\nprint(f)\nprint(1)", "1");
    assert_output("print([1, function() end function])", "[1, ]");
}

#[test]
fn len_builtin() {
    assert_output(r#"print(len("hello"))"#, "5");
    assert_output("print(len([1, 2]))", "2");
    assert_output(r#"print(len(""))"#, "0");
    assert_error("print(len(5))");
}

#[test]
fn range_builtin() {
    assert_output("print(range(3))", "[0, 1, 2]");
    assert_output("print(range(1, 4))", "[1, 2, 3]");
    assert_output("print(range(10, 4, -2))", "[10, 8, 6]");
    assert_output("print(range(0, 10, 3))", "[0, 3, 6, 9]");
    assert_output("print(len(range(0)))", "0");
    assert_error("print(range(0, 1, 0))");
    assert_error(r#"print(range("a"))"#);
}

#[test]
fn math_builtins() {
    assert_output("print(abs(-5))", "5");
    assert_output("print(ceil(3.2))", "4");
    assert_output("print(floor(3.7))", "3");
    assert_output("print(round(3.2))\nprint(round(3.7))", "34");
    assert_output("print(sqrt(9))", "3");
    assert_error(r#"print(abs("a"))"#);
}

#[test]
fn rnd_builtin() {
    assert_output("print(rnd(1))", "0");
    assert_output("print(rnd(0))", "0");
    assert_output("print(rnd(-3))", "0");
    assert_output("r = rnd(10)\nprint(r >= 0 and r < 10)", "1");
}

#[test]
fn parse_num_builtin() {
    assert_output(r#"print(parse_num("123.45"))"#, "123.45");
    assert_output(r#"print(parse_num("abc"))"#, "nil");
    assert_output("print(parse_num(5))", "nil");
}

#[test]
fn to_string_builtin() {
    assert_output("print(to_string(3.14))", "3.14");
    assert_output(r#"print(to_string(2) + "x")"#, "2x");
    assert_error(r#"print(to_string("a"))"#);
}

#[test]
fn case_builtins() {
    assert_output(r#"a = "InTerPretER"
b = lower(a)
print(b)"#,
                  "interpreter");
    assert_output(r#"print(upper("abc"))"#, "ABC");
    assert_error("print(lower(5))");
}

#[test]
fn split_builtin() {
    assert_output(r#"print(split("a,b,c", ","))"#, "[\"a\", \"b\", \"c\"]");
    assert_output(r#"print(split("abc", "x"))"#, "[\"abc\"]");
    assert_output(r#"print(split("a,,b", ","))"#, "[\"a\", \"\", \"b\"]");
    assert_output(r#"print(split("a,", ","))"#, "[\"a\", \"\"]");
    assert_output(r#"print(split("ab", ""))"#, "[\"ab\"]");
    assert_error(r#"print(split("a", 1))"#);
}

#[test]
fn join_builtin() {
    assert_output(r#"print(join(["a", "b", "c"], "-"))"#, "a-b-c");
    assert_output(r#"print(join([], "-"))"#, "");
    assert_error(r#"print(join([1], "-"))"#);
    assert_error(r#"print(join("a", "-"))"#);
}

#[test]
fn replace_builtin() {
    assert_output(r#"print(replace("hello world", "o", "0"))"#, "hell0 w0rld");
    assert_output(r#"print(replace("aaa", "aa", "b"))"#, "ba");
    assert_output(r#"print(replace("abc", "x", "y"))"#, "abc");
}

#[test]
fn push_and_pop_builtins() {
    assert_output("l = [1]\npush(l, 2)\nprint(l)", "[1, 2]");
    assert_output("l = [1, 2]\nprint(pop(l))\nprint(l)", "2[1]");
    assert_output("print(pop([]))", "nil");
    assert_error("push(5, 1)");
}

#[test]
fn insert_builtin_clamps_the_index() {
    assert_output("l = [1, 3]\ninsert(l, 1, 2)\nprint(l)", "[1, 2, 3]");
    assert_output("l = [2]\ninsert(l, -5, 1)\nprint(l)", "[1, 2]");
    assert_output("l = [1]\ninsert(l, 99, 2)\nprint(l)", "[1, 2]");
}

#[test]
fn remove_builtin_ignores_out_of_range() {
    assert_output("l = [1, 2, 3]\nprint(remove(l, 1))\nprint(l)", "2[1, 3]");
    assert_output("l = [1]\nprint(remove(l, -1))\nprint(l)", "nil[1]");
    assert_output("l = [1]\nprint(remove(l, 5))\nprint(l)", "nil[1]");
}

#[test]
fn sort_builtin() {
    assert_output("l = [3, 1, 2]\nsort(l)\nprint(l)", "[1, 2, 3]");
    assert_output(r#"l = ["b", "a", "c"]
sort(l)
print(l)"#,
                  "[\"a\", \"b\", \"c\"]");
    // mixed lists are silently left unchanged
    assert_output(r#"l = [2, "a", 1]
sort(l)
print(l)"#,
                  "[2, \"a\", 1]");
    assert_error("sort(5)");
}

#[test]
fn stub_builtins() {
    assert_output("print(stacktrace())", "[]");
    assert_output("print(len(read()))", "0");
}

#[test]
fn optional_do_and_semicolon_separators() {
    assert_output("for i in range(3) do print(i) end for", "012");
    assert_output("a = 1; b = 2; print(a + b)", "3");
}

#[test]
fn string_repeat_matches_concatenation() {
    assert_output(r#"s = "ab"
print(s * 3 == s + s + s)
print(s * 0 == "")"#,
                  "11");
}

#[test]
fn format_number_round_trips() {
    assert_output(r#"print(parse_num(to_string(2.5)) == 2.5)
print(to_string(parse_num("7")) == "7")"#,
                  "11");
}
